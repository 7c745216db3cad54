use blog_api::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("No such blog post: {0}")]
    PostNotFound(i64),

    /// 存储层错误，原样透传
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, BlogError>;
