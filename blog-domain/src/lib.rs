pub mod content;

pub use content::{Post, PostBuilder, PostCategory, ParseCategoryError, PostStore};
