//! List Item Repository Implementations
//!
//! One adapter per supported storage backend.

mod memory;
mod mongo;
mod postgres;

pub use memory::InMemoryListItemRepository;
pub use mongo::{ListItemDocument, MongoListItemRepository};
pub use postgres::PostgresListItemRepository;
