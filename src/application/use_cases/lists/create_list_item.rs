//! Create List Item Use Case
//!
//! Adds a new item to the list.

use std::sync::Arc;

use crate::domain::gateways::ListItemRepository;
use crate::domain::models::list_item::{ListItem, ListText};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new list item
pub struct CreateListItemUseCase {
    list_item_repository: Arc<dyn ListItemRepository>,
}

impl CreateListItemUseCase {
    /// Create a new CreateListItemUseCase
    #[must_use]
    pub fn new(list_item_repository: Arc<dyn ListItemRepository>) -> Self {
        Self { list_item_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if the text is blank or too long after trimming.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, raw_list: &str) -> Result<ListItem, UseCaseError> {
        let list = ListText::parse(raw_list)?;
        tracing::info!(length = list.as_str().len(), "Creating new list item");

        let created = self.list_item_repository.create(&list).await?;

        tracing::info!(list_id = %created.id(), "List item created successfully");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::MockListItemRepository;
    use crate::domain::models::list_item::ListItemId;
    use crate::shared::errors::RepositoryError;

    #[tokio::test]
    async fn should_create_list_item_with_trimmed_text() {
        let mut repo = MockListItemRepository::new();
        repo.expect_create()
            .withf(|list| list.as_str() == "buy milk")
            .times(1)
            .returning(|list| Ok(ListItem::restore(ListItemId::Serial(1), list.as_str().to_string())));

        let use_case = CreateListItemUseCase::new(Arc::new(repo));
        let item = use_case.execute("   buy milk  ").await.unwrap();

        assert_eq!(item.id(), &ListItemId::Serial(1));
        assert_eq!(item.list(), "buy milk");
    }

    #[tokio::test]
    async fn should_reject_blank_text_without_touching_storage() {
        let mut repo = MockListItemRepository::new();
        repo.expect_create().never();

        let use_case = CreateListItemUseCase::new(Arc::new(repo));
        let result = use_case.execute(" \t ").await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Domain(_)));
    }

    #[tokio::test]
    async fn should_reject_oversized_text_without_touching_storage() {
        let mut repo = MockListItemRepository::new();
        repo.expect_create().never();

        let use_case = CreateListItemUseCase::new(Arc::new(repo));
        let result = use_case.execute(&"x".repeat(201)).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Domain(_)));
    }

    #[tokio::test]
    async fn should_propagate_repository_errors() {
        let mut repo = MockListItemRepository::new();
        repo.expect_create()
            .returning(|_| Err(RepositoryError::Mapping("insert returned no id".to_string())));

        let use_case = CreateListItemUseCase::new(Arc::new(repo));
        let result = use_case.execute("eggs").await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Repository(_)));
    }
}
