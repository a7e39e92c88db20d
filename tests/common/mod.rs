//! Common test utilities for e2e tests
//!
//! Builds the full axum application on top of one of the storage backends.
//! The PostgreSQL and MongoDB variants start a throwaway container, so they
//! need a running Docker daemon.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde::Deserialize;
use serde_json::Value;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::{mongo::Mongo, postgres::Postgres};
use tower::util::ServiceExt;

use list_items_api::infrastructure::driven_adapters::config::{
    DatabaseConfig, MongoConfig, StorageBackend,
};
use list_items_api::infrastructure::driven_adapters::database::{
    create_collection, create_pool, run_migrations,
};
use list_items_api::infrastructure::driven_adapters::list_item_repository::{
    InMemoryListItemRepository, MongoListItemRepository, PostgresListItemRepository,
};
use list_items_api::infrastructure::driving_adapters::api_rest::{build_router, AppState};

/// Keeps the database container alive for as long as the test runs
#[allow(dead_code)]
enum Backing {
    Memory,
    Postgres(ContainerAsync<Postgres>),
    Mongo(ContainerAsync<Mongo>),
}

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub backend: StorageBackend,
    _backing: Backing,
}

/// Decoded response: status, headers and JSON body (Null when empty)
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Value,
}

impl TestApp {
    /// Application backed by the in-memory repository
    pub async fn memory() -> Self {
        let repository = Arc::new(InMemoryListItemRepository::new());
        Self {
            router: build_router(AppState::new(StorageBackend::Memory, repository)),
            backend: StorageBackend::Memory,
            _backing: Backing::Memory,
        }
    }

    /// Application backed by a fresh PostgreSQL container
    pub async fn postgres() -> Self {
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let pool = create_pool(&DatabaseConfig {
            url: format!("postgres://postgres:postgres@{host}:{port}/postgres"),
            max_connections: 5,
            min_connections: 1,
        })
        .await
        .expect("Failed to connect to test database");

        run_migrations(&pool).await.expect("Failed to run migrations");

        let repository = Arc::new(PostgresListItemRepository::new(pool));
        Self {
            router: build_router(AppState::new(StorageBackend::Postgres, repository)),
            backend: StorageBackend::Postgres,
            _backing: Backing::Postgres(container),
        }
    }

    /// Application backed by a fresh MongoDB container
    pub async fn mongo() -> Self {
        let container = Mongo::default()
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get port");

        let collection = create_collection(&MongoConfig {
            uri: format!("mongodb://{host}:{port}"),
            database: "listdb_test".to_string(),
            collection: "lists".to_string(),
        })
        .await
        .expect("Failed to connect to test document store");

        let repository = Arc::new(MongoListItemRepository::new(collection));
        Self {
            router: build_router(AppState::new(StorageBackend::Mongo, repository)),
            backend: StorageBackend::Mongo,
            _backing: Backing::Mongo(container),
        }
    }

    /// A well-formed id that no record will ever have
    pub fn missing_id(&self) -> &'static str {
        match self.backend {
            StorageBackend::Mongo => "507f1f77bcf86cd799439011",
            StorageBackend::Postgres | StorageBackend::Memory => "999999",
        }
    }

    /// Send a request through the router, with an optional JSON body
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        self.send_request(request).await
    }

    /// Send a prebuilt request through the router
    pub async fn send_request(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// POST /lists and return the created item
    pub async fn create(&self, list: &str) -> ListItemResponse {
        let response = self
            .send(Method::POST, "/lists", Some(serde_json::json!({ "list": list })))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "body: {}", response.body);
        serde_json::from_value(response.body).unwrap()
    }

    /// GET /lists and return every item
    pub async fn list_all(&self) -> Vec<ListItemResponse> {
        let response = self.send(Method::GET, "/lists", None).await;
        assert_eq!(response.status, StatusCode::OK);
        serde_json::from_value(response.body).unwrap()
    }
}

/// List item response structure for deserialization
#[derive(Debug, Clone, Deserialize)]
pub struct ListItemResponse {
    pub id: Value,
    pub list: String,
}

impl ListItemResponse {
    /// Path of this item under /lists
    pub fn path(&self) -> String {
        match &self.id {
            Value::String(id) => format!("/lists/{id}"),
            other => format!("/lists/{other}"),
        }
    }
}
