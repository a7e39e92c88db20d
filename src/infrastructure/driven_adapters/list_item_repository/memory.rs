//! In-Memory List Item Repository
//!
//! Process-local store with the same serial id semantics as the relational
//! backend. Used for local runs without a database and for HTTP tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::postgres::{expect_serial, parse_serial_id};
use crate::domain::gateways::ListItemRepository;
use crate::domain::models::list_item::{ListItem, ListItemId, ListText};
use crate::shared::errors::RepositoryError;

#[derive(Debug, Default)]
struct Store {
    last_id: i32,
    items: BTreeMap<i32, ListItem>,
}

/// In-memory implementation of ListItemRepository
#[derive(Debug, Default)]
pub struct InMemoryListItemRepository {
    store: RwLock<Store>,
}

impl InMemoryListItemRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ListItemRepository for InMemoryListItemRepository {
    fn parse_id(&self, raw: &str) -> Result<ListItemId, RepositoryError> {
        parse_serial_id(raw)
    }

    async fn create(&self, list: &ListText) -> Result<ListItem, RepositoryError> {
        let mut store = self.store.write().await;
        // Serial ids are never reused, same as a SERIAL column
        let id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::Mapping("serial id space exhausted".to_string()))?;
        store.last_id = id;

        let item = ListItem::restore(ListItemId::Serial(id), list.as_str().to_string());
        store.items.insert(id, item.clone());
        Ok(item)
    }

    async fn find_all(&self) -> Result<Vec<ListItem>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.items.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &ListItemId) -> Result<Option<ListItem>, RepositoryError> {
        let key = expect_serial(id)?;
        let store = self.store.read().await;
        Ok(store.items.get(&key).cloned())
    }

    async fn update(&self, id: &ListItemId, list: &ListText) -> Result<Option<ListItem>, RepositoryError> {
        let key = expect_serial(id)?;
        let mut store = self.store.write().await;

        let Some(existing) = store.items.remove(&key) else {
            return Ok(None);
        };
        let updated = existing.with_list(list.clone());
        store.items.insert(key, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: &ListItemId) -> Result<u64, RepositoryError> {
        let key = expect_serial(id)?;
        let mut store = self.store.write().await;
        Ok(u64::from(store.items.remove(&key).is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> ListText {
        ListText::parse(value).unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryListItemRepository::new();

        let first = repo.create(&text("a")).await.unwrap();
        let second = repo.create(&text("b")).await.unwrap();

        assert_eq!(first.id(), &ListItemId::Serial(1));
        assert_eq!(second.id(), &ListItemId::Serial(2));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryListItemRepository::new();

        let first = repo.create(&text("a")).await.unwrap();
        assert_eq!(repo.delete(first.id()).await.unwrap(), 1);

        let second = repo.create(&text("b")).await.unwrap();
        assert_eq!(second.id(), &ListItemId::Serial(2));
    }

    #[tokio::test]
    async fn test_update_replaces_text() {
        let repo = InMemoryListItemRepository::new();
        let item = repo.create(&text("old")).await.unwrap();

        let updated = repo.update(item.id(), &text("new")).await.unwrap().unwrap();
        assert_eq!(updated.list(), "new");

        let found = repo.find_by_id(item.id()).await.unwrap().unwrap();
        assert_eq!(found.list(), "new");
    }

    #[tokio::test]
    async fn test_update_and_delete_report_missing_ids() {
        let repo = InMemoryListItemRepository::new();
        let missing = ListItemId::Serial(42);

        assert!(repo.update(&missing, &text("x")).await.unwrap().is_none());
        assert_eq!(repo.delete(&missing).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_find_all_returns_items_in_id_order() {
        let repo = InMemoryListItemRepository::new();
        for value in ["one", "two", "three"] {
            repo.create(&text(value)).await.unwrap();
        }
        let second = ListItemId::Serial(2);
        repo.delete(&second).await.unwrap();

        let lists: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|item| item.list().to_string())
            .collect();
        assert_eq!(lists, vec!["one", "three"]);
    }

    #[test]
    fn test_parse_id_uses_serial_rules() {
        let repo = InMemoryListItemRepository::new();
        assert!(repo.parse_id("12").is_ok());
        assert!(matches!(
            repo.parse_id("507f1f77bcf86cd799439011"),
            Err(RepositoryError::InvalidId(_))
        ));
    }
}
