//! Handlers for the `/bookings` resource.
//!
//! Creation validates the whole payload before touching the store. Status
//! updates accept any target status; moves outside the usual admin
//! workflow are logged at `warn` but still applied.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use salon_core::booking::is_conventional_transition;
use salon_db::models::booking::{Booking, CreateBooking, UpdateBooking};
use salon_db::{Patch, Record};

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, JsonBody, QueryParams, ValidatedJson};
use crate::query::DateParams;
use crate::state::AppState;

/// POST /api/bookings
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let new = input.into_new()?;
    let booking = state.pool.bookings.insert(new)?;
    tracing::info!(
        booking_id = booking.id,
        date = %booking.appointment_date,
        time = %booking.appointment_time,
        "Booking created"
    );
    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /api/bookings
///
/// Every booking, or only those on `?date=YYYY-MM-DD` when given.
pub async fn list(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<DateParams>,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = match params.date.as_deref() {
        Some(date) => state.pool.bookings_on(date)?,
        None => state.pool.bookings.list_all()?,
    };
    Ok(Json(bookings))
}

/// GET /api/bookings/date/{date}
pub async fn list_by_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> AppResult<Json<Vec<Booking>>> {
    Ok(Json(state.pool.bookings_on(&date)?))
}

/// GET /api/bookings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Booking>> {
    let booking = state
        .pool
        .bookings
        .find_by_id(id)?
        .ok_or(AppError::not_found(Booking::ENTITY, id))?;
    Ok(Json(booking))
}

/// PATCH /api/bookings/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateBooking>,
) -> AppResult<Json<Booking>> {
    let changed = input.changed_fields();
    let (booking, previous) = state
        .pool
        .bookings
        .modify(id, |booking| {
            let previous = booking.status;
            input.apply(booking);
            previous
        })?
        .ok_or(AppError::not_found(Booking::ENTITY, id))?;

    if !is_conventional_transition(previous, booking.status) {
        tracing::warn!(
            booking_id = id,
            from = %previous,
            to = %booking.status,
            "Unconventional booking status transition"
        );
    }
    tracing::info!(
        booking_id = id,
        fields = ?changed,
        status = %booking.status,
        "Booking updated"
    );
    Ok(Json(booking))
}
