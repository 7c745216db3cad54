pub mod database;
pub mod memory;

pub use database::{DatabaseManager, SeaOrmPostStore};
pub use memory::InMemoryPostStore;
