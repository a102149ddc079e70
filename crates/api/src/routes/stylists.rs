use axum::routing::get;
use axum::Router;

use crate::handlers::stylists;
use crate::state::AppState;

/// Routes mounted at `/stylists`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PATCH  /{id}      -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(stylists::list).post(stylists::create))
        .route("/{id}", get(stylists::get_by_id).patch(stylists::update))
}
