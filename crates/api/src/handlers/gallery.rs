//! Handlers for the `/gallery` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use salon_db::models::gallery::{CreateGalleryEntry, GalleryEntry};
use salon_db::Record;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::state::AppState;

/// POST /api/gallery
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateGalleryEntry>,
) -> AppResult<(StatusCode, Json<GalleryEntry>)> {
    let entry = state.pool.gallery.insert(input)?;
    tracing::info!(gallery_id = entry.id, title = %entry.title, "Gallery entry created");
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/gallery
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<GalleryEntry>>> {
    Ok(Json(state.pool.gallery.list_visible()?))
}

/// GET /api/gallery/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<GalleryEntry>> {
    let entry = state
        .pool
        .gallery
        .find_by_id(id)?
        .ok_or(AppError::not_found(GalleryEntry::ENTITY, id))?;
    Ok(Json(entry))
}
