pub mod page;
pub mod error;

pub use page::{PageRequest, PageResult, DEFAULT_PAGE_SIZE};
pub use error::{StoreError, StoreResult};
