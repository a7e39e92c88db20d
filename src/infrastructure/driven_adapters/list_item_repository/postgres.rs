//! PostgreSQL List Item Repository Implementation
//!
//! Implements the ListItemRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::gateways::ListItemRepository;
use crate::domain::models::list_item::{ListItem, ListItemId, ListText};
use crate::shared::errors::RepositoryError;

/// Database row representation for the lists table
#[derive(Debug, sqlx::FromRow)]
struct ListItemRow {
    id: i32,
    list: String,
}

impl From<ListItemRow> for ListItem {
    fn from(row: ListItemRow) -> Self {
        ListItem::restore(ListItemId::Serial(row.id), row.list)
    }
}

/// Parse a serial id, rejecting anything that is not a 32-bit integer
pub(super) fn parse_serial_id(raw: &str) -> Result<ListItemId, RepositoryError> {
    raw.parse::<i32>()
        .map(ListItemId::Serial)
        .map_err(|e| RepositoryError::InvalidId(format!("'{raw}' is not an integer id ({e})")))
}

/// Extract the serial value from an id handed to a serial-id backend
pub(super) fn expect_serial(id: &ListItemId) -> Result<i32, RepositoryError> {
    id.as_serial()
        .ok_or_else(|| RepositoryError::InvalidId(format!("'{id}' is not an integer id")))
}

/// PostgreSQL implementation of ListItemRepository
pub struct PostgresListItemRepository {
    pool: PgPool,
}

impl PostgresListItemRepository {
    /// Create a new PostgresListItemRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListItemRepository for PostgresListItemRepository {
    fn parse_id(&self, raw: &str) -> Result<ListItemId, RepositoryError> {
        parse_serial_id(raw)
    }

    async fn create(&self, list: &ListText) -> Result<ListItem, RepositoryError> {
        let row = sqlx::query_as::<_, ListItemRow>(
            r#"
            INSERT INTO lists (list)
            VALUES ($1)
            RETURNING id, list
            "#,
        )
        .bind(list.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<ListItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, ListItemRow>(
            r#"
            SELECT id, list
            FROM lists
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ListItem::from).collect())
    }

    async fn find_by_id(&self, id: &ListItemId) -> Result<Option<ListItem>, RepositoryError> {
        let row = sqlx::query_as::<_, ListItemRow>(
            r#"
            SELECT id, list
            FROM lists
            WHERE id = $1
            "#,
        )
        .bind(expect_serial(id)?)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ListItem::from))
    }

    async fn update(&self, id: &ListItemId, list: &ListText) -> Result<Option<ListItem>, RepositoryError> {
        let row = sqlx::query_as::<_, ListItemRow>(
            r#"
            UPDATE lists
            SET list = $2
            WHERE id = $1
            RETURNING id, list
            "#,
        )
        .bind(expect_serial(id)?)
        .bind(list.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ListItem::from))
    }

    async fn delete(&self, id: &ListItemId) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM lists
            WHERE id = $1
            "#,
        )
        .bind(expect_serial(id)?)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
