//! Booking status lifecycle and appointment-date helpers.
//!
//! Staff move a booking through `pending -> confirmed -> completed`, or
//! cancel it while it is still pending. The graph below documents that
//! workflow, but the store accepts any status on update; callers use
//! [`is_conventional_transition`] only to flag unusual moves.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Statuses the admin workflow moves a booking to from `self`.
    ///
    /// - `pending`   -> `confirmed`, `cancelled`
    /// - `confirmed` -> `completed`
    /// - `completed`, `cancelled` -> (none)
    pub fn conventional_transitions(self) -> &'static [BookingStatus] {
        match self {
            BookingStatus::Pending => &[BookingStatus::Confirmed, BookingStatus::Cancelled],
            BookingStatus::Confirmed => &[BookingStatus::Completed],
            BookingStatus::Completed | BookingStatus::Cancelled => &[],
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `from -> to` follows the admin workflow.
///
/// Re-writing the current status is treated as conventional (a no-op).
pub fn is_conventional_transition(from: BookingStatus, to: BookingStatus) -> bool {
    from == to || from.conventional_transitions().contains(&to)
}

// ---------------------------------------------------------------------------
// Appointment dates
// ---------------------------------------------------------------------------

/// Format used for calendar-day filters (`YYYY-MM-DD`).
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// The UTC calendar day of `ts`, formatted as `YYYY-MM-DD`.
pub fn date_key(ts: &Timestamp) -> String {
    ts.date_naive().format(DATE_KEY_FORMAT).to_string()
}

/// Parse an appointment date sent by a client.
///
/// Accepts a full RFC 3339 timestamp (`2024-04-01T00:00:00.000Z`) or a bare
/// calendar date (`2024-04-01`), the latter read as UTC midnight.
pub fn parse_appointment_date(raw: &str) -> Result<Timestamp, CoreError> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, DATE_KEY_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "Invalid appointment date '{raw}'. Expected RFC 3339 or YYYY-MM-DD"
            ))
        })
}

/// Serde adapter for optional appointment dates using [`parse_appointment_date`].
///
/// Use with `#[serde(default, deserialize_with = "...")]` so a missing field
/// stays `None` and is reported by the `required` validator instead.
pub fn deserialize_optional_appointment_date<'de, D>(
    deserializer: D,
) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|s| parse_appointment_date(&s).map_err(serde::de::Error::custom))
        .transpose()
}

// ---------------------------------------------------------------------------
// Client input rules
// ---------------------------------------------------------------------------

/// The terms-and-conditions checkbox must be ticked when it is sent.
pub fn validate_terms_agreement(agreed: &bool) -> Result<(), validator::ValidationError> {
    if *agreed {
        Ok(())
    } else {
        let mut err = validator::ValidationError::new("terms");
        err.message = Some("You must agree to terms and conditions".into());
        Err(err)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn default_status_is_pending() {
        assert_eq!(BookingStatus::default(), BookingStatus::Pending);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&BookingStatus::Confirmed).unwrap();
        assert_eq!(json, "\"confirmed\"");
        let parsed: BookingStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, BookingStatus::Cancelled);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_str::<BookingStatus>("\"archived\"").is_err());
    }

    #[test]
    fn pending_moves_to_confirmed_or_cancelled() {
        assert!(is_conventional_transition(BookingStatus::Pending, BookingStatus::Confirmed));
        assert!(is_conventional_transition(BookingStatus::Pending, BookingStatus::Cancelled));
        assert!(!is_conventional_transition(BookingStatus::Pending, BookingStatus::Completed));
    }

    #[test]
    fn confirmed_moves_to_completed() {
        assert!(is_conventional_transition(BookingStatus::Confirmed, BookingStatus::Completed));
        assert!(!is_conventional_transition(BookingStatus::Confirmed, BookingStatus::Pending));
    }

    #[test]
    fn terminal_states_have_no_further_moves() {
        assert!(BookingStatus::Completed.conventional_transitions().is_empty());
        assert!(BookingStatus::Cancelled.conventional_transitions().is_empty());
        assert!(!is_conventional_transition(BookingStatus::Completed, BookingStatus::Pending));
    }

    #[test]
    fn rewriting_same_status_is_conventional() {
        for status in BookingStatus::ALL {
            assert!(is_conventional_transition(status, status));
        }
    }

    #[test]
    fn date_key_uses_utc_calendar_day() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 23, 30, 0).unwrap();
        assert_eq!(date_key(&ts), "2024-03-15");
    }

    #[test]
    fn parses_rfc3339_and_bare_dates() {
        let full = parse_appointment_date("2024-04-01T00:00:00.000Z").unwrap();
        assert_eq!(full, Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap());

        let bare = parse_appointment_date("2024-04-01").unwrap();
        assert_eq!(bare, full);

        let offset = parse_appointment_date("2024-04-01T02:00:00+05:30").unwrap();
        assert_eq!(date_key(&offset), "2024-03-31");
    }

    #[test]
    fn garbage_dates_are_rejected() {
        assert!(parse_appointment_date("tomorrow").is_err());
        assert!(parse_appointment_date("2024-13-40").is_err());
        assert!(parse_appointment_date("").is_err());
    }

    #[test]
    fn terms_must_be_accepted() {
        assert!(validate_terms_agreement(&true).is_ok());
        assert!(validate_terms_agreement(&false).is_err());
    }
}
