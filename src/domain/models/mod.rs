//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod list_item;

pub use list_item::{DocumentId, ListItem, ListItemId, ListText, MAX_LIST_TEXT_LEN};
