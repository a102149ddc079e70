//! Salon services (haircuts, spa treatments, bridal packages, ...).

use rust_decimal::Decimal;
use salon_core::types::{deserialize_nullable, DbId, Timestamp};
use salon_core::validation::validate_price;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::repository::{IntoRecord, Patch, Record};

/// A bookable service. Only active services appear in the catalog listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    /// Length of the appointment in minutes.
    pub duration: i32,
    pub category: String,
    pub image: Option<String>,
    pub is_active: bool,
}

impl Record for Service {
    const ENTITY: &'static str = "Service";

    fn id(&self) -> DbId {
        self.id
    }

    fn is_visible(&self) -> bool {
        self.is_active
    }
}

/// DTO for creating a service.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateService {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
    #[validate(range(min = 15, max = 480))]
    pub duration: i32,
    #[validate(length(min = 1))]
    pub category: String,
    pub image: Option<String>,
    pub is_active: Option<bool>,
}

impl IntoRecord<Service> for CreateService {
    fn into_record(self, id: DbId, _now: Timestamp) -> Service {
        Service {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            duration: self.duration,
            category: self.category,
            image: self.image,
            is_active: self.is_active.unwrap_or(true),
        }
    }
}

/// DTO for partially updating a service.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateService {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "validate_price"))]
    pub price: Option<Decimal>,
    #[validate(range(min = 15, max = 480))]
    pub duration: Option<i32>,
    #[validate(length(min = 1))]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub image: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl Patch<Service> for UpdateService {
    fn apply(self, service: &mut Service) {
        if let Some(name) = self.name {
            service.name = name;
        }
        if let Some(description) = self.description {
            service.description = description;
        }
        if let Some(price) = self.price {
            service.price = price;
        }
        if let Some(duration) = self.duration {
            service.duration = duration;
        }
        if let Some(category) = self.category {
            service.category = category;
        }
        if let Some(image) = self.image {
            service.image = image;
        }
        if let Some(is_active) = self.is_active {
            service.is_active = is_active;
        }
    }
}
