pub mod content;
pub mod error;

pub use content::{
    BlogService, DefaultBlogService, PostSummary, DEFAULT_EXCERPT_LENGTH,
    PaginationInfo,
    extract_first_paragraph,
};
pub use error::{BlogError, Result};
