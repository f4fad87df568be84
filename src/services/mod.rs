// Service exports
pub mod fixtures;
pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::InMemoryStore;
pub use postgres::PostgresClient;
pub use store::{ProfileStore, StoreError};
