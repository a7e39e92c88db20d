//! Get List Item By ID Use Case
//!
//! Retrieves a single list item by its ID.

use std::sync::Arc;

use crate::domain::gateways::ListItemRepository;
use crate::domain::models::list_item::ListItem;
use crate::shared::errors::UseCaseError;

/// Use case for getting a list item by ID
pub struct GetListItemByIdUseCase {
    list_item_repository: Arc<dyn ListItemRepository>,
}

impl GetListItemByIdUseCase {
    /// Create a new GetListItemByIdUseCase
    #[must_use]
    pub fn new(list_item_repository: Arc<dyn ListItemRepository>) -> Self {
        Self { list_item_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if the id is malformed for the backend.
    /// Returns `UseCaseError::NotFound` if the item doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, raw_id: &str) -> Result<ListItem, UseCaseError> {
        let id = self.list_item_repository.parse_id(raw_id)?;
        tracing::debug!(list_id = %id, "Getting list item by ID");

        let item = self.list_item_repository.find_by_id(&id).await?.ok_or_else(|| {
            tracing::warn!(list_id = %id, "List item not found");
            UseCaseError::list_not_found(id)
        })?;

        tracing::debug!(list_id = %id, "List item found");
        Ok(item)
    }
}
