//! Database Connection Management
//!
//! Utilities for creating storage connections and the repository that sits on top.

use std::sync::Arc;

use mongodb::{Client, Collection};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::config::{AppConfig, DatabaseConfig, MongoConfig, StorageBackend};
use super::list_item_repository::{
    InMemoryListItemRepository, ListItemDocument, MongoListItemRepository,
    PostgresListItemRepository,
};
use crate::domain::gateways::ListItemRepository;

/// Create a PostgreSQL connection pool from configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect(&config.url)
        .await
}

/// Create the `lists` table if it does not exist yet
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Connect to the document store and open the list collection
pub async fn create_collection(
    config: &MongoConfig,
) -> Result<Collection<ListItemDocument>, mongodb::error::Error> {
    let client = Client::with_uri_str(&config.uri).await?;
    Ok(client
        .database(&config.database)
        .collection::<ListItemDocument>(&config.collection))
}

/// Connect to the configured backend and build its repository
///
/// # Errors
///
/// Returns an error if the backend cannot be reached or the schema cannot be created.
pub async fn connect_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn ListItemRepository>> {
    let repository: Arc<dyn ListItemRepository> = match config.storage.backend {
        StorageBackend::Postgres => {
            let pool = create_pool(&config.database).await?;
            tracing::info!("Database connection pool created");

            run_migrations(&pool).await?;
            tracing::info!("Database migrations completed");

            Arc::new(PostgresListItemRepository::new(pool))
        }
        StorageBackend::Mongo => {
            let collection = create_collection(&config.mongo).await?;
            tracing::info!(
                database = %config.mongo.database,
                collection = %config.mongo.collection,
                "Document store client created"
            );

            Arc::new(MongoListItemRepository::new(collection))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, data is lost on restart");
            Arc::new(InMemoryListItemRepository::new())
        }
    };

    Ok(repository)
}
