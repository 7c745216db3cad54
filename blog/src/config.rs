use blog_api::DEFAULT_PAGE_SIZE;
use blog_service::DEFAULT_EXCERPT_LENGTH;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub blog: BlogConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost:5432/blog".to_string(),
            max_connections: 10,
            min_connections: 1,
            run_migrations: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    pub page_size: u32,
    pub excerpt_length: usize,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            excerpt_length: DEFAULT_EXCERPT_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// RUST_LOG 未设置时使用
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let home_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let config_path = home_dir.join(".blog").join("blog.toml");

        // 如果存在.env文件，加载它
        dotenv::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name("blog.toml").required(false))
            .add_source(config::File::from(config_path.as_path()).required(false))
            .add_source(config::Environment::with_prefix("BLOG").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.blog.page_size, 10);
        assert_eq!(config.blog.excerpt_length, 500);
        assert_eq!(config.logging.level, "info");
        assert!(config.database.run_migrations);
    }

    #[test]
    fn test_partial_source_keeps_defaults() {
        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(
                "[blog]\npage_size = 5\n\n[database]\nurl = \"postgres://db/blog\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.blog.page_size, 5);
        assert_eq!(config.blog.excerpt_length, 500);
        assert_eq!(config.database.url, "postgres://db/blog");
        assert_eq!(config.database.max_connections, 10);
    }
}
