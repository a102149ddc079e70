//! Handler for time-slot availability.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use salon_core::booking::date_key;
use salon_core::schedule::TimeSlot;

use crate::error::AppResult;
use crate::extract::QueryParams;
use crate::query::DateParams;
use crate::state::AppState;

/// GET /api/time-slots
///
/// Availability of each fixed slot on `?date=YYYY-MM-DD`, defaulting to
/// the current UTC day.
pub async fn time_slots(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<DateParams>,
) -> AppResult<Json<Vec<TimeSlot>>> {
    let date = params.date.unwrap_or_else(|| date_key(&Utc::now()));
    Ok(Json(state.pool.time_slots_on(&date)?))
}
