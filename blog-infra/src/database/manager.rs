use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// DatabaseManager 管理文章库的数据库连接
#[derive(Clone)]
pub struct DatabaseManager {
    db: Arc<DatabaseConnection>,
}

impl DatabaseManager {
    /// 创建新的DatabaseManager并建立连接
    pub async fn connect(
        url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(url.to_string());
        options
            .max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(8))
            .sqlx_logging(false);

        let db = Database::connect(options).await?;
        info!(max_connections, min_connections, "database connection established");

        Ok(Self { db: Arc::new(db) })
    }

    /// 获取数据库连接
    pub fn connection(&self) -> Arc<DatabaseConnection> {
        self.db.clone()
    }
}
