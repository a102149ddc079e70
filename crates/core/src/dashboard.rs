//! Booking statistics for the admin dashboard.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::booking::BookingStatus;
use crate::error::CoreError;
use crate::types::DbId;

/// Headline numbers shown on the admin overview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStats {
    pub total_bookings: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub completed: usize,
    pub cancelled: usize,
    /// Sum of the linked service price over completed bookings.
    pub total_revenue: Decimal,
}

impl BookingStats {
    /// Tally `(status, service_id)` pairs.
    ///
    /// `service_price` resolves a service id to its price; bookings without a
    /// service, or whose service no longer exists, add nothing to revenue.
    /// A revenue total that does not fit in a [`Decimal`] is an internal
    /// error.
    pub fn compute<I, F>(bookings: I, service_price: F) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (BookingStatus, Option<DbId>)>,
        F: Fn(DbId) -> Option<Decimal>,
    {
        let mut stats = BookingStats::default();
        for (status, service_id) in bookings {
            stats.total_bookings += 1;
            match status {
                BookingStatus::Pending => stats.pending += 1,
                BookingStatus::Confirmed => stats.confirmed += 1,
                BookingStatus::Cancelled => stats.cancelled += 1,
                BookingStatus::Completed => {
                    stats.completed += 1;
                    if let Some(price) = service_id.and_then(&service_price) {
                        stats.total_revenue =
                            stats.total_revenue.checked_add(price).ok_or_else(|| {
                                CoreError::Internal("booking revenue total overflowed".into())
                            })?;
                    }
                }
            }
        }
        Ok(stats)
    }
}
