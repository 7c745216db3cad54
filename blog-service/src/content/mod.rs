pub mod blog_service;
pub mod pagination;
mod excerpt;

pub use blog_service::{BlogService, DefaultBlogService, PostSummary, DEFAULT_EXCERPT_LENGTH};
pub use pagination::PaginationInfo;
pub use excerpt::extract_first_paragraph;
