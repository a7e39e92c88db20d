//! MongoDB List Item Repository Implementation
//!
//! Implements the ListItemRepository trait on top of a single collection whose
//! documents look like `{ _id: ObjectId, list: String }`.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::ReturnDocument;
use mongodb::Collection;
use serde::{Deserialize, Serialize};

use crate::domain::gateways::ListItemRepository;
use crate::domain::models::list_item::{DocumentId, ListItem, ListItemId, ListText};
use crate::shared::errors::RepositoryError;

/// Stored document representation of a list item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListItemDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub list: String,
}

impl From<ObjectId> for DocumentId {
    fn from(oid: ObjectId) -> Self {
        DocumentId::from_bytes(oid.bytes())
    }
}

impl From<DocumentId> for ObjectId {
    fn from(id: DocumentId) -> Self {
        ObjectId::from_bytes(id.bytes())
    }
}

impl TryFrom<ListItemDocument> for ListItem {
    type Error = RepositoryError;

    fn try_from(document: ListItemDocument) -> Result<Self, Self::Error> {
        let id = document
            .id
            .ok_or_else(|| RepositoryError::Mapping("document has no _id".to_string()))?;
        Ok(ListItem::restore(ListItemId::Object(id.into()), document.list))
    }
}

fn expect_object_id(id: &ListItemId) -> Result<ObjectId, RepositoryError> {
    id.as_document_id()
        .map(ObjectId::from)
        .ok_or_else(|| RepositoryError::InvalidId(format!("'{id}' is not an ObjectId")))
}

/// MongoDB implementation of ListItemRepository
pub struct MongoListItemRepository {
    collection: Collection<ListItemDocument>,
}

impl MongoListItemRepository {
    /// Create a new MongoListItemRepository
    #[must_use]
    pub fn new(collection: Collection<ListItemDocument>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl ListItemRepository for MongoListItemRepository {
    fn parse_id(&self, raw: &str) -> Result<ListItemId, RepositoryError> {
        ObjectId::parse_str(raw)
            .map(|oid| ListItemId::Object(oid.into()))
            .map_err(|e| RepositoryError::InvalidId(format!("'{raw}' is not an ObjectId ({e})")))
    }

    async fn create(&self, list: &ListText) -> Result<ListItem, RepositoryError> {
        let document = ListItemDocument {
            id: None,
            list: list.as_str().to_string(),
        };

        let result = self.collection.insert_one(&document).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| RepositoryError::Mapping("inserted _id is not an ObjectId".to_string()))?;

        Ok(ListItem::restore(ListItemId::Object(id.into()), document.list))
    }

    async fn find_all(&self) -> Result<Vec<ListItem>, RepositoryError> {
        let documents: Vec<ListItemDocument> = self.collection.find(doc! {}).await?.try_collect().await?;

        documents.into_iter().map(ListItem::try_from).collect()
    }

    async fn find_by_id(&self, id: &ListItemId) -> Result<Option<ListItem>, RepositoryError> {
        let oid = expect_object_id(id)?;
        let document = self.collection.find_one(doc! { "_id": oid }).await?;

        document.map(ListItem::try_from).transpose()
    }

    async fn update(&self, id: &ListItemId, list: &ListText) -> Result<Option<ListItem>, RepositoryError> {
        let oid = expect_object_id(id)?;
        let document = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": { "list": list.as_str() } })
            .return_document(ReturnDocument::After)
            .await?;

        document.map(ListItem::try_from).transpose()
    }

    async fn delete(&self, id: &ListItemId) -> Result<u64, RepositoryError> {
        let oid = expect_object_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;

        Ok(result.deleted_count)
    }
}
