//! Handlers for the `/memberships` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use salon_db::models::membership::{CreateMembership, Membership};
use salon_db::Record;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::state::AppState;

/// POST /api/memberships
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateMembership>,
) -> AppResult<(StatusCode, Json<Membership>)> {
    let membership = state.pool.memberships.insert(input)?;
    tracing::info!(membership_id = membership.id, name = %membership.name, "Membership created");
    Ok((StatusCode::CREATED, Json(membership)))
}

/// GET /api/memberships
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Membership>>> {
    Ok(Json(state.pool.memberships.list_visible()?))
}

/// GET /api/memberships/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Membership>> {
    let membership = state
        .pool
        .memberships
        .find_by_id(id)?
        .ok_or(AppError::not_found(Membership::ENTITY, id))?;
    Ok(Json(membership))
}
