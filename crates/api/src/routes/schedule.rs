use axum::routing::get;
use axum::Router;

use crate::handlers::schedule;
use crate::state::AppState;

/// Time-slot lookup, merged at the `/api` root.
///
/// ```text
/// GET    /time-slots    -> time_slots (optional ?date=YYYY-MM-DD)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/time-slots", get(schedule::time_slots))
}
