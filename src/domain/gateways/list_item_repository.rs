//! List Item Repository Gateway
//!
//! Abstract trait defining the contract for list item persistence operations.

use async_trait::async_trait;

use crate::domain::models::list_item::{ListItem, ListItemId, ListText};
use crate::shared::errors::RepositoryError;

/// Repository trait for ListItem persistence operations
///
/// Every backend owns its id format, so raw ids coming from the outside are
/// parsed here rather than in the API layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListItemRepository: Send + Sync {
    /// Parse a raw identifier into the form this backend stores
    ///
    /// Returns `RepositoryError::InvalidId` when the value is malformed.
    fn parse_id(&self, raw: &str) -> Result<ListItemId, RepositoryError>;

    /// Insert a new item and return it with its assigned id
    async fn create(&self, list: &ListText) -> Result<ListItem, RepositoryError>;

    /// Find all items
    async fn find_all(&self) -> Result<Vec<ListItem>, RepositoryError>;

    /// Find an item by its ID
    async fn find_by_id(&self, id: &ListItemId) -> Result<Option<ListItem>, RepositoryError>;

    /// Replace the text of an item, returning the updated item or `None` if nothing matched
    async fn update(&self, id: &ListItemId, list: &ListText) -> Result<Option<ListItem>, RepositoryError>;

    /// Delete an item, returning the number of records removed
    async fn delete(&self, id: &ListItemId) -> Result<u64, RepositoryError>;
}
