//! Health Handler

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::infrastructure::driving_adapters::api_rest::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub backend: String,
}

#[must_use]
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health))
}

/// GET /health - Liveness probe, does not touch storage
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        backend: state.backend.to_string(),
    })
}
