pub mod admin;
pub mod bookings;
pub mod gallery;
pub mod health;
pub mod memberships;
pub mod products;
pub mod schedule;
pub mod services;
pub mod stylists;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                         service health
///
/// /services                       list (active), create
/// /services/{id}                  get, update, delete
///
/// /stylists                       list (available), create
/// /stylists/{id}                  get, update
///
/// /bookings                       list (optional ?date=), create
/// /bookings/{id}                  get, update
/// /bookings/date/{date}           list for one day
///
/// /products                       list (in stock), create
/// /products/{id}                  get, update
///
/// /memberships                    list, create
/// /memberships/{id}               get
///
/// /gallery                        list, create
/// /gallery/{id}                   get
///
/// /time-slots                     slot availability (optional ?date=)
///
/// /admin/stats                    booking counts and revenue
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/services", services::router())
        .nest("/stylists", stylists::router())
        .nest("/bookings", bookings::router())
        .nest("/products", products::router())
        .nest("/memberships", memberships::router())
        .nest("/gallery", gallery::router())
        .merge(schedule::router())
        .nest("/admin", admin::router())
}
