//! Route definitions for appointment bookings.

use axum::routing::get;
use axum::Router;

use crate::handlers::bookings;
use crate::state::AppState;

/// Routes mounted at `/bookings`.
///
/// ```text
/// GET    /              -> list (optional ?date=YYYY-MM-DD)
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PATCH  /{id}          -> update
/// GET    /date/{date}   -> list_by_date
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(bookings::list).post(bookings::create))
        .route("/{id}", get(bookings::get_by_id).patch(bookings::update))
        .route("/date/{date}", get(bookings::list_by_date))
}
