pub mod app_config;
pub mod repository;
pub mod memory_repo;

pub use app_config::Config;
pub use memory_repo::MemoryStore;
pub use repository::{OrderRepository, ProductRepository, StoreError, UpdateAck};
