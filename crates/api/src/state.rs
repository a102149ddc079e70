/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone; the store is reference counted.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory store.
    pub pool: salon_db::DbPool,
}
