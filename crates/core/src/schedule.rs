//! Bookable time slots.
//!
//! Slots are free-text labels, not structured ranges. Availability here is
//! advisory: the booking endpoint never rejects a slot that is already held.

use serde::Serialize;

use crate::booking::BookingStatus;

/// The salon's fixed daily slot labels, in order.
pub const TIME_SLOTS: &[&str] = &[
    "10:00 AM - 12:00 PM",
    "12:00 PM - 2:00 PM",
    "2:00 PM - 4:00 PM",
    "4:00 PM - 6:00 PM",
    "6:00 PM - 8:00 PM",
];

/// A slot label and whether any live booking already holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub time: &'static str,
    pub available: bool,
}

/// Mark each slot as taken if a non-cancelled booking for the same day uses it.
///
/// `day_bookings` yields `(slot label, status)` pairs for one calendar day.
pub fn slot_availability<'a, I>(day_bookings: I) -> Vec<TimeSlot>
where
    I: IntoIterator<Item = (&'a str, BookingStatus)>,
{
    let taken: Vec<&str> = day_bookings
        .into_iter()
        .filter(|(_, status)| *status != BookingStatus::Cancelled)
        .map(|(slot, _)| slot)
        .collect();

    TIME_SLOTS
        .iter()
        .map(|&time| TimeSlot {
            time,
            available: !taken.contains(&time),
        })
        .collect()
}
