mod cli;
mod config;
mod error;
mod front_page;

use blog_infra::{DatabaseManager, SeaOrmPostStore};
use blog_migration::{Migrator, MigratorTrait};
use blog_service::DefaultBlogService;
use clap::Parser;
use cli::Cli;
use crate::config::Config;
use error::{AppError, Result};
use front_page::FrontPageRequest;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn init_logging(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::Logging(e.to_string()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let request = FrontPageRequest::from(Cli::parse());

    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    init_logging(&config)?;
    info!("Configuration loaded successfully");

    // 初始化数据库连接
    let db_manager = DatabaseManager::connect(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await?;
    let db = db_manager.connection();

    if config.database.run_migrations {
        Migrator::up(&*db, None).await?;
        info!("Database migrations applied");
    }

    let store = Arc::new(SeaOrmPostStore::new(db));
    let service = DefaultBlogService::new(store).with_excerpt_length(config.blog.excerpt_length);

    let page = front_page::render(&service, request, config.blog.page_size).await?;
    print!("{}", page);

    Ok(())
}
