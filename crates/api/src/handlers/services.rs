//! Handlers for the `/services` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use salon_db::models::service::{CreateService, Service, UpdateService};
use salon_db::Record;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::state::AppState;

/// POST /api/services
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateService>,
) -> AppResult<(StatusCode, Json<Service>)> {
    let service = state.pool.services.insert(input)?;
    tracing::info!(service_id = service.id, name = %service.name, "Service created");
    Ok((StatusCode::CREATED, Json(service)))
}

/// GET /api/services
///
/// Active services only.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Service>>> {
    let services = state.pool.services.list_visible()?;
    Ok(Json(services))
}

/// GET /api/services/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Service>> {
    let service = state
        .pool
        .services
        .find_by_id(id)?
        .ok_or(AppError::not_found(Service::ENTITY, id))?;
    Ok(Json(service))
}

/// PATCH /api/services/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateService>,
) -> AppResult<Json<Service>> {
    let service = state
        .pool
        .services
        .update(id, input)?
        .ok_or(AppError::not_found(Service::ENTITY, id))?;
    tracing::info!(service_id = id, "Service updated");
    Ok(Json(service))
}

/// DELETE /api/services/{id}
///
/// Bookings that reference the service keep their `serviceId`.
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<StatusCode> {
    if state.pool.services.delete(id)? {
        tracing::info!(service_id = id, "Service deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(Service::ENTITY, id))
    }
}
