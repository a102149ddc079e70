use axum::routing::get;
use axum::Router;

use crate::handlers::memberships;
use crate::state::AppState;

/// Routes mounted at `/memberships`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(memberships::list).post(memberships::create))
        .route("/{id}", get(memberships::get_by_id))
}
