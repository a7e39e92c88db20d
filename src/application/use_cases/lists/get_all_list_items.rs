//! Get All List Items Use Case
//!
//! Retrieves every stored list item.

use std::sync::Arc;

use crate::domain::gateways::ListItemRepository;
use crate::domain::models::list_item::ListItem;
use crate::shared::errors::UseCaseError;

/// Use case for getting all list items
pub struct GetAllListItemsUseCase {
    list_item_repository: Arc<dyn ListItemRepository>,
}

impl GetAllListItemsUseCase {
    /// Create a new GetAllListItemsUseCase
    #[must_use]
    pub fn new(list_item_repository: Arc<dyn ListItemRepository>) -> Self {
        Self { list_item_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<ListItem>, UseCaseError> {
        tracing::debug!("Getting all list items");

        let items = self.list_item_repository.find_all().await?;

        tracing::debug!(count = items.len(), "Found list items");
        Ok(items)
    }
}
