pub mod post;
pub mod category;
pub mod store;

pub use post::{Post, PostBuilder};
pub use category::{PostCategory, ParseCategoryError};
pub use store::PostStore;
