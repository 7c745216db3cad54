pub mod post_entity;
pub mod manager;
pub mod repository;

pub use manager::DatabaseManager;
pub use repository::SeaOrmPostStore;
