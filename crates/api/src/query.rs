//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Optional calendar-day filter (`?date=YYYY-MM-DD`).
///
/// Used by the booking list and the time-slot lookup. The value is matched
/// textually against each booking's UTC day, so a malformed date simply
/// matches nothing.
#[derive(Debug, Default, Deserialize)]
pub struct DateParams {
    pub date: Option<String>,
}
