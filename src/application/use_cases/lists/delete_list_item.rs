//! Delete List Item Use Case
//!
//! Permanently removes a list item.

use std::sync::Arc;

use crate::domain::gateways::ListItemRepository;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a list item
pub struct DeleteListItemUseCase {
    list_item_repository: Arc<dyn ListItemRepository>,
}

impl DeleteListItemUseCase {
    /// Create a new DeleteListItemUseCase
    #[must_use]
    pub fn new(list_item_repository: Arc<dyn ListItemRepository>) -> Self {
        Self { list_item_repository }
    }

    /// Execute the use case
    ///
    /// Not idempotent: deleting an id twice yields `NotFound` the second time.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if the id is malformed for the backend.
    /// Returns `UseCaseError::NotFound` if no item was deleted.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, raw_id: &str) -> Result<(), UseCaseError> {
        let id = self.list_item_repository.parse_id(raw_id)?;
        tracing::info!(list_id = %id, "Deleting list item");

        let deleted = self.list_item_repository.delete(&id).await?;

        if deleted == 0 {
            tracing::warn!(list_id = %id, "List item not found for deletion");
            return Err(UseCaseError::list_not_found(id));
        }

        tracing::info!(list_id = %id, "List item deleted successfully");
        Ok(())
    }
}
