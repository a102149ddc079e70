//! Appointment bookings.
//!
//! A booking is created from a client request and then moved through its
//! status lifecycle by staff. Service and stylist references are stored as
//! given; nothing checks that they point at existing records.

use salon_core::booking::{
    deserialize_optional_appointment_date, validate_terms_agreement, BookingStatus,
};
use salon_core::error::CoreError;
use salon_core::types::{deserialize_nullable, DbId, Timestamp};
use salon_core::validation::{validate_input, FieldIssue};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::repository::{IntoRecord, Patch, Record};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: DbId,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub service_id: Option<DbId>,
    pub stylist_id: Option<DbId>,
    pub appointment_date: Timestamp,
    /// Free-text slot label, e.g. `"10:00 AM - 12:00 PM"`.
    pub appointment_time: String,
    pub status: BookingStatus,
    pub special_requests: Option<String>,
    /// Set once at creation.
    pub created_at: Timestamp,
}

impl Record for Booking {
    const ENTITY: &'static str = "Booking";

    fn id(&self) -> DbId {
        self.id
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Booking request as submitted by a client.
///
/// Required fields are `Option` so that a missing field is reported through
/// the same per-field issue list as a malformed one. Call
/// [`CreateBooking::into_new`] to validate and obtain a [`NewBooking`].
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    #[validate(required, length(min = 2, message = "Name must be at least 2 characters"))]
    pub client_name: Option<String>,
    #[validate(required, email(message = "Invalid email address"))]
    pub client_email: Option<String>,
    #[validate(required, length(min = 10, message = "Phone number must be at least 10 digits"))]
    pub client_phone: Option<String>,
    pub service_id: Option<DbId>,
    pub stylist_id: Option<DbId>,
    #[serde(default, deserialize_with = "deserialize_optional_appointment_date")]
    #[validate(required)]
    pub appointment_date: Option<Timestamp>,
    #[validate(required, length(min = 1, message = "Please select a time"))]
    pub appointment_time: Option<String>,
    pub status: Option<BookingStatus>,
    pub special_requests: Option<String>,
    /// Terms-and-conditions checkbox. Checked, never stored.
    #[validate(custom(function = "validate_terms_agreement"))]
    pub agree_to_terms: Option<bool>,
}

/// A booking request that passed validation.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub service_id: Option<DbId>,
    pub stylist_id: Option<DbId>,
    pub appointment_date: Timestamp,
    pub appointment_time: String,
    pub status: BookingStatus,
    pub special_requests: Option<String>,
}

impl CreateBooking {
    /// Validate every field and unpack the required ones.
    pub fn into_new(self) -> Result<NewBooking, CoreError> {
        validate_input(&self, "Invalid booking data")?;

        Ok(NewBooking {
            client_name: required(self.client_name, "clientName")?,
            client_email: required(self.client_email, "clientEmail")?,
            client_phone: required(self.client_phone, "clientPhone")?,
            service_id: self.service_id,
            stylist_id: self.stylist_id,
            appointment_date: required(self.appointment_date, "appointmentDate")?,
            appointment_time: required(self.appointment_time, "appointmentTime")?,
            status: self.status.unwrap_or_default(),
            special_requests: self.special_requests,
        })
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::InvalidFields {
        message: "Invalid booking data".to_string(),
        issues: vec![FieldIssue {
            field: field.to_string(),
            message: "is required".to_string(),
        }],
    })
}

impl IntoRecord<Booking> for NewBooking {
    fn into_record(self, id: DbId, now: Timestamp) -> Booking {
        Booking {
            id,
            client_name: self.client_name,
            client_email: self.client_email,
            client_phone: self.client_phone,
            service_id: self.service_id,
            stylist_id: self.stylist_id,
            appointment_date: self.appointment_date,
            appointment_time: self.appointment_time,
            status: self.status,
            special_requests: self.special_requests,
            created_at: now,
        }
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// Partial update, typically just `{ "status": "confirmed" }`.
///
/// Any status may be written; the lifecycle graph is not enforced here.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBooking {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub client_name: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub client_email: Option<String>,
    #[validate(length(min = 10, message = "Phone number must be at least 10 digits"))]
    pub client_phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub service_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub stylist_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "deserialize_optional_appointment_date")]
    pub appointment_date: Option<Timestamp>,
    #[validate(length(min = 1, message = "Please select a time"))]
    pub appointment_time: Option<String>,
    pub status: Option<BookingStatus>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub special_requests: Option<Option<String>>,
}

impl UpdateBooking {
    /// A status-only update.
    pub fn status(status: BookingStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// camelCase names of the fields this update sets or clears.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        [
            ("clientName", self.client_name.is_some()),
            ("clientEmail", self.client_email.is_some()),
            ("clientPhone", self.client_phone.is_some()),
            ("serviceId", self.service_id.is_some()),
            ("stylistId", self.stylist_id.is_some()),
            ("appointmentDate", self.appointment_date.is_some()),
            ("appointmentTime", self.appointment_time.is_some()),
            ("status", self.status.is_some()),
            ("specialRequests", self.special_requests.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }
}

impl Patch<Booking> for UpdateBooking {
    fn apply(self, booking: &mut Booking) {
        if let Some(client_name) = self.client_name {
            booking.client_name = client_name;
        }
        if let Some(client_email) = self.client_email {
            booking.client_email = client_email;
        }
        if let Some(client_phone) = self.client_phone {
            booking.client_phone = client_phone;
        }
        if let Some(service_id) = self.service_id {
            booking.service_id = service_id;
        }
        if let Some(stylist_id) = self.stylist_id {
            booking.stylist_id = stylist_id;
        }
        if let Some(appointment_date) = self.appointment_date {
            booking.appointment_date = appointment_date;
        }
        if let Some(appointment_time) = self.appointment_time {
            booking.appointment_time = appointment_time;
        }
        if let Some(status) = self.status {
            booking.status = status;
        }
        if let Some(special_requests) = self.special_requests {
            booking.special_requests = special_requests;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
