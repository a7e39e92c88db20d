//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod list_item;

pub use list_item::{DeleteResponseDto, ListItemDto, ListItemIdDto, ListItemResponseDto};
