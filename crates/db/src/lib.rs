//! In-memory data store for the salon backend.
//!
//! One [`Table`] per entity type, bundled into a [`Store`] that is built once
//! at startup and shared by handle. Nothing is persisted; a restart
//! discards bookings and catalog edits.

use std::sync::Arc;

use rust_decimal::Decimal;
use salon_core::booking::date_key;
use salon_core::dashboard::BookingStats;
use salon_core::schedule::{slot_availability, TimeSlot};
use salon_core::types::DbId;

pub mod error;
pub mod models;
pub mod repository;
pub mod seed;

pub use error::StoreError;
pub use repository::{IntoRecord, Patch, Record, Table};

use models::booking::Booking;
use models::gallery::GalleryEntry;
use models::membership::Membership;
use models::product::Product;
use models::service::Service;
use models::stylist::Stylist;

/// Shared handle to the store, cloned into every request.
pub type DbPool = Arc<Store>;

/// All entity tables.
#[derive(Default)]
pub struct Store {
    pub services: Table<Service>,
    pub stylists: Table<Stylist>,
    pub bookings: Table<Booking>,
    pub products: Table<Product>,
    pub memberships: Table<Membership>,
    pub gallery: Table<GalleryEntry>,
}

impl Store {
    /// A store with every table empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store pre-loaded with the sample catalog.
    pub fn seeded() -> Result<Self, StoreError> {
        let store = Self::empty();
        seed::seed_catalog(&store)?;
        Ok(store)
    }

    /// Bookings whose appointment falls on the UTC calendar day `date`
    /// (`YYYY-MM-DD`). A malformed `date` simply matches nothing.
    pub fn bookings_on(&self, date: &str) -> Result<Vec<Booking>, StoreError> {
        self.bookings.filter(|b| date_key(&b.appointment_date) == date)
    }

    /// Slot availability for one calendar day.
    pub fn time_slots_on(&self, date: &str) -> Result<Vec<TimeSlot>, StoreError> {
        let day = self.bookings_on(date)?;
        Ok(slot_availability(
            day.iter().map(|b| (b.appointment_time.as_str(), b.status)),
        ))
    }

    /// Admin overview numbers. Revenue resolves each completed booking's
    /// service at read time, so deleted services contribute nothing. A
    /// revenue total too large to represent is [`StoreError::Aggregate`].
    pub fn booking_stats(&self) -> Result<BookingStats, StoreError> {
        let bookings = self.bookings.list_all()?;
        let prices: Vec<(DbId, Decimal)> = self
            .services
            .list_all()?
            .into_iter()
            .map(|s| (s.id, s.price))
            .collect();

        let stats = BookingStats::compute(
            bookings.iter().map(|b| (b.status, b.service_id)),
            |id| prices.iter().find(|(sid, _)| *sid == id).map(|(_, p)| *p),
        )?;
        Ok(stats)
    }
}

/// Build the shared store, optionally seeding the sample catalog.
pub fn create_pool(seed_sample_data: bool) -> Result<DbPool, StoreError> {
    let store = if seed_sample_data {
        Store::seeded()?
    } else {
        Store::empty()
    };
    Ok(Arc::new(store))
}

/// Confirm every table lock can be acquired.
pub fn health_check(pool: &DbPool) -> Result<(), StoreError> {
    pool.services.len()?;
    pool.stylists.len()?;
    pool.bookings.len()?;
    pool.products.len()?;
    pool.memberships.len()?;
    pool.gallery.len()?;
    Ok(())
}
