//! Media handlers - catalog CRUD and lookups.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use crate::error::HttpError;
use crate::state::AppState;
use media_core::MediaItem;

/// Empty collections are reported as not found.
fn non_empty(items: Vec<MediaItem>, what: &str) -> Result<Json<Vec<MediaItem>>, HttpError> {
    if items.is_empty() {
        return Err(HttpError::NotFound(format!("No media items {what}")));
    }
    Ok(Json(items))
}

/// List all media items.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<MediaItem>>, HttpError> {
    let items = state.media.get_media_items().await?;
    non_empty(items, "found")
}

/// Get a single media item by ID.
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MediaItem>, HttpError> {
    let Path(id) = id?;
    state
        .media
        .get_media_item_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::NotFound(format!("Media item {id}")))
}

/// List media items with an exact title.
pub async fn list_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<Vec<MediaItem>>, HttpError> {
    let items = state.media.get_media_items_with_title(&title).await?;
    non_empty(items, &format!("with title '{title}'"))
}

/// List media items of a media type.
pub async fn list_by_media_type(
    State(state): State<AppState>,
    media_type_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<MediaItem>>, HttpError> {
    let Path(media_type_id) = media_type_id?;
    let items = state
        .media
        .get_media_items_by_media_type(media_type_id)
        .await?;
    non_empty(items, &format!("for media type {media_type_id}"))
}

/// Create a media item. Responds 201 with the stored item and its location.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<MediaItem>, JsonRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let Json(item) = payload?;
    let created = state.media.add_media_item(&item).await?;
    tracing::info!(id = created.id, title = %created.title, "media item created");

    let location = format!("/api/media/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

/// Update a media item. The path id overrides any id in the payload.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<MediaItem>, JsonRejection>,
) -> Result<Json<MediaItem>, HttpError> {
    let Path(id) = id?;
    let Json(mut item) = payload?;
    item.id = id;
    state.media.update_media_item(&item).await?;
    Ok(Json(item))
}

/// Delete a media item.
///
/// The stored row is loaded and passed through full validation before it
/// is removed.
pub async fn remove(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, HttpError> {
    let Path(id) = id?;
    let item = state
        .media
        .get_media_item_by_id(id)
        .await?
        .ok_or_else(|| HttpError::NotFound(format!("Media item {id}")))?;

    state.media.remove_media_item(&item).await?;
    tracing::info!(id, "media item removed");
    Ok(StatusCode::NO_CONTENT)
}
