//! Domain Layer
//!
//! Contains the core business logic, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::list_item_repository::ListItemRepository;
pub use models::list_item::{DocumentId, ListItem, ListItemId, ListText, MAX_LIST_TEXT_LEN};
