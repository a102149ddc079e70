//! Handlers for the `/stylists` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use salon_db::models::stylist::{CreateStylist, Stylist, UpdateStylist};
use salon_db::Record;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::state::AppState;

/// POST /api/stylists
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateStylist>,
) -> AppResult<(StatusCode, Json<Stylist>)> {
    let stylist = state.pool.stylists.insert(input)?;
    tracing::info!(stylist_id = stylist.id, name = %stylist.name, "Stylist created");
    Ok((StatusCode::CREATED, Json(stylist)))
}

/// GET /api/stylists
///
/// Available stylists only.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Stylist>>> {
    Ok(Json(state.pool.stylists.list_visible()?))
}

/// GET /api/stylists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Stylist>> {
    let stylist = state
        .pool
        .stylists
        .find_by_id(id)?
        .ok_or(AppError::not_found(Stylist::ENTITY, id))?;
    Ok(Json(stylist))
}

/// PATCH /api/stylists/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateStylist>,
) -> AppResult<Json<Stylist>> {
    let stylist = state
        .pool
        .stylists
        .update(id, input)?
        .ok_or(AppError::not_found(Stylist::ENTITY, id))?;
    tracing::info!(stylist_id = id, available = stylist.is_available, "Stylist updated");
    Ok(Json(stylist))
}
