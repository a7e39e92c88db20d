//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod list_item_repository;

pub use list_item_repository::ListItemRepository;
#[cfg(test)]
pub use list_item_repository::MockListItemRepository;
