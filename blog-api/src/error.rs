use thiserror::Error;

/// StoreError 表示文章存储层的失败，服务层原样透传
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Corrupted record: {0}")]
    Corrupted(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
