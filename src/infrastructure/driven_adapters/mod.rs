//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories
//! - Configuration
//! - Storage connection setup

pub mod config;
pub mod database;
pub mod list_item_repository;

pub use config::{AppConfig, StorageBackend};
pub use list_item_repository::{
    InMemoryListItemRepository, MongoListItemRepository, PostgresListItemRepository,
};
