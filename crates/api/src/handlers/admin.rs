//! Handlers for the admin dashboard.

use axum::extract::State;
use axum::Json;
use salon_core::dashboard::BookingStats;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/admin/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<BookingStats>> {
    Ok(Json(state.pool.booking_stats()?))
}
