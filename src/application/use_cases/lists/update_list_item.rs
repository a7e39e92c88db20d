//! Update List Item Use Case (PUT)
//!
//! Replaces the text of an existing list item.

use std::sync::Arc;

use crate::domain::gateways::ListItemRepository;
use crate::domain::models::list_item::{ListItem, ListText};
use crate::shared::errors::UseCaseError;

/// Use case for replacing the text of a list item
pub struct UpdateListItemUseCase {
    list_item_repository: Arc<dyn ListItemRepository>,
}

impl UpdateListItemUseCase {
    /// Create a new UpdateListItemUseCase
    #[must_use]
    pub fn new(list_item_repository: Arc<dyn ListItemRepository>) -> Self {
        Self { list_item_repository }
    }

    /// Execute the use case
    ///
    /// The write is conditional on the id existing, so no lookup precedes it.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if the id is malformed for the backend.
    /// Returns `UseCaseError::Domain` if the text is blank or too long after trimming.
    /// Returns `UseCaseError::NotFound` if the item doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, raw_id: &str, raw_list: &str) -> Result<ListItem, UseCaseError> {
        let id = self.list_item_repository.parse_id(raw_id)?;
        let list = ListText::parse(raw_list)?;
        tracing::info!(list_id = %id, "Updating list item");

        let updated = self
            .list_item_repository
            .update(&id, &list)
            .await?
            .ok_or_else(|| {
                tracing::warn!(list_id = %id, "List item not found for update");
                UseCaseError::list_not_found(id)
            })?;

        tracing::info!(list_id = %id, "List item updated successfully");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::MockListItemRepository;
    use crate::domain::models::list_item::{DocumentId, ListItemId};
    use crate::shared::errors::RepositoryError;
    use mongodb::bson::oid::ObjectId;

    fn object_ids(repo: &mut MockListItemRepository) {
        repo.expect_parse_id().returning(|raw| {
            ObjectId::parse_str(raw)
                .map(|oid| ListItemId::Object(DocumentId::from(oid)))
                .map_err(|_| RepositoryError::InvalidId(raw.to_string()))
        });
    }

    #[tokio::test]
    async fn should_replace_text() {
        let mut repo = MockListItemRepository::new();
        object_ids(&mut repo);
        repo.expect_update()
            .withf(|_, list| list.as_str() == "new text")
            .times(1)
            .returning(|id, list| Ok(Some(ListItem::restore(*id, list.as_str().to_string()))));

        let use_case = UpdateListItemUseCase::new(Arc::new(repo));
        let item = use_case
            .execute("507f1f77bcf86cd799439011", "  new text ")
            .await
            .unwrap();

        assert_eq!(item.id().to_string(), "507f1f77bcf86cd799439011");
        assert_eq!(item.list(), "new text");
    }

    #[tokio::test]
    async fn should_return_not_found_when_nothing_matched() {
        let mut repo = MockListItemRepository::new();
        object_ids(&mut repo);
        repo.expect_update().returning(|_, _| Ok(None));

        let use_case = UpdateListItemUseCase::new(Arc::new(repo));
        let result = use_case.execute("507f1f77bcf86cd799439011", "text").await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }

    #[tokio::test]
    async fn should_reject_malformed_id() {
        let mut repo = MockListItemRepository::new();
        object_ids(&mut repo);
        repo.expect_update().never();

        let use_case = UpdateListItemUseCase::new(Arc::new(repo));
        let result = use_case.execute("507f1f77", "text").await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Validation(_)));
    }

    #[tokio::test]
    async fn should_reject_invalid_text_without_writing() {
        let mut repo = MockListItemRepository::new();
        object_ids(&mut repo);
        repo.expect_update().never();

        let use_case = UpdateListItemUseCase::new(Arc::new(repo));
        let blank = use_case.execute("507f1f77bcf86cd799439011", "   ").await;
        let too_long = use_case
            .execute("507f1f77bcf86cd799439011", &"y".repeat(250))
            .await;

        assert!(matches!(blank.unwrap_err(), UseCaseError::Domain(_)));
        assert!(matches!(too_long.unwrap_err(), UseCaseError::Domain(_)));
    }
}
