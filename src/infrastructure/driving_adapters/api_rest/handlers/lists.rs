//! List Item Handlers
//!
//! HTTP handlers for list item CRUD operations.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::infrastructure::driving_adapters::api_rest::dto::list_item::{
    DeleteResponseDto, ListItemDto, ListItemResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for list item endpoints
#[must_use]
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_list_items).post(create_list_item))
        .route(
            "/{id}",
            get(get_list_item_by_id)
                .put(update_list_item)
                .delete(delete_list_item),
        )
}

/// POST /lists - Create a new list item
///
/// # Responses
///
/// * 201 Created - Item created, body holds the stored item
/// * 400 Bad Request - Blank, oversized or unreadable `list`
#[axum::debug_handler]
async fn create_list_item(
    State(state): State<AppState>,
    payload: Result<Json<ListItemDto>, JsonRejection>,
) -> Result<(StatusCode, Json<ListItemResponseDto>), ApiError> {
    let Json(dto) = payload?;
    dto.validate()?;

    let item = state.create_list_item_use_case.execute(&dto.list).await?;

    Ok((StatusCode::CREATED, Json(ListItemResponseDto::from(item))))
}

/// GET /lists - Get all list items
#[axum::debug_handler]
async fn get_all_list_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<ListItemResponseDto>>, ApiError> {
    let items = state.get_all_list_items_use_case.execute().await?;

    let response: Vec<ListItemResponseDto> = items.into_iter().map(ListItemResponseDto::from).collect();
    Ok(Json(response))
}

/// GET /lists/{id} - Get a list item by ID
///
/// # Responses
///
/// * 200 OK - Item found
/// * 400 Bad Request - Malformed id for the active backend
/// * 404 Not Found - Item does not exist
#[axum::debug_handler]
async fn get_list_item_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ListItemResponseDto>, ApiError> {
    let item = state.get_list_item_by_id_use_case.execute(&id).await?;

    Ok(Json(ListItemResponseDto::from(item)))
}

/// PUT /lists/{id} - Replace the text of a list item
///
/// # Responses
///
/// * 200 OK - Item updated, body holds the full record
/// * 400 Bad Request - Malformed id or invalid `list`
/// * 404 Not Found - Item does not exist
#[axum::debug_handler]
async fn update_list_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ListItemDto>, JsonRejection>,
) -> Result<Json<ListItemResponseDto>, ApiError> {
    let Json(dto) = payload?;
    dto.validate()?;

    let item = state.update_list_item_use_case.execute(&id, &dto.list).await?;

    Ok(Json(ListItemResponseDto::from(item)))
}

/// DELETE /lists/{id} - Delete a list item
///
/// # Responses
///
/// * 200 OK - Item deleted
/// * 400 Bad Request - Malformed id for the active backend
/// * 404 Not Found - Nothing was deleted
#[axum::debug_handler]
async fn delete_list_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponseDto>, ApiError> {
    state.delete_list_item_use_case.execute(&id).await?;

    Ok(Json(DeleteResponseDto::deleted()))
}
