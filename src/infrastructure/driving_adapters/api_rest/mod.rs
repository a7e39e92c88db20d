//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::lists::{
    CreateListItemUseCase, DeleteListItemUseCase, GetAllListItemsUseCase, GetListItemByIdUseCase,
    UpdateListItemUseCase,
};
use crate::domain::gateways::ListItemRepository;
use crate::infrastructure::driven_adapters::config::StorageBackend;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub backend: StorageBackend,
    pub create_list_item_use_case: Arc<CreateListItemUseCase>,
    pub get_all_list_items_use_case: Arc<GetAllListItemsUseCase>,
    pub get_list_item_by_id_use_case: Arc<GetListItemByIdUseCase>,
    pub update_list_item_use_case: Arc<UpdateListItemUseCase>,
    pub delete_list_item_use_case: Arc<DeleteListItemUseCase>,
}

impl AppState {
    /// Wire every use case to the same repository
    #[must_use]
    pub fn new(backend: StorageBackend, list_item_repository: Arc<dyn ListItemRepository>) -> Self {
        Self {
            backend,
            create_list_item_use_case: Arc::new(CreateListItemUseCase::new(list_item_repository.clone())),
            get_all_list_items_use_case: Arc::new(GetAllListItemsUseCase::new(list_item_repository.clone())),
            get_list_item_by_id_use_case: Arc::new(GetListItemByIdUseCase::new(list_item_repository.clone())),
            update_list_item_use_case: Arc::new(UpdateListItemUseCase::new(list_item_repository.clone())),
            delete_list_item_use_case: Arc::new(DeleteListItemUseCase::new(list_item_repository)),
        }
    }
}

/// CORS policy: any origin, the five verbs the API uses, JSON and auth headers
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Build the full HTTP application
#[must_use]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/lists", handlers::lists::router())
        .nest("/health", handlers::health::router())
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(cors_layer())
        .with_state(state)
}
