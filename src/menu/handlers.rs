//! REST API handlers for menu operations
//!
//! This module maps the five catalog operations onto `/api/menu`.

use super::{
    error::MenuError,
    models::{MenuItem, MenuItemInput},
    state::SharedState,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};

/// Creates routes for menu-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/menu", get(list_items).post(create_item))
        .route(
            "/api/menu/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
}

/// Endpoint: GET /api/menu
async fn list_items(State(state): State<SharedState>) -> Json<Vec<MenuItem>> {
    Json(state.menu.list())
}

/// Endpoint: GET /api/menu/{id}
async fn get_item(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MenuItem>, MenuError> {
    let Path(id) = id?;
    state.menu.get(id).map(Json)
}

/// Endpoint: POST /api/menu
/// Stores a new item under a freshly assigned id; any id in the body is ignored.
async fn create_item(
    State(state): State<SharedState>,
    body: Result<Json<MenuItemInput>, JsonRejection>,
) -> Result<(StatusCode, Json<MenuItem>), MenuError> {
    let Json(candidate) = body?;
    let item = state.menu.create(candidate)?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Endpoint: PUT /api/menu/{id}
/// Replaces all fields of an existing item; the path id wins over the body.
async fn update_item(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<MenuItemInput>, JsonRejection>,
) -> Result<Json<MenuItem>, MenuError> {
    let Path(id) = id?;
    let Json(replacement) = body?;
    state.menu.update(id, replacement).map(Json)
}

/// Endpoint: DELETE /api/menu/{id}
async fn delete_item(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, MenuError> {
    let Path(id) = id?;
    if state.menu.delete(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(MenuError::NotFound(id))
    }
}
