//! Stylists who can be requested on a booking.

use salon_core::types::{deserialize_nullable, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::repository::{IntoRecord, Patch, Record};

/// A stylist. Only available stylists appear in the listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stylist {
    pub id: DbId,
    pub name: String,
    pub specialization: String,
    /// Years of experience.
    pub experience: i32,
    pub image: Option<String>,
    pub is_available: bool,
}

impl Record for Stylist {
    const ENTITY: &'static str = "Stylist";

    fn id(&self) -> DbId {
        self.id
    }

    fn is_visible(&self) -> bool {
        self.is_available
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStylist {
    #[validate(length(min = 1))]
    pub name: String,
    pub specialization: String,
    #[validate(range(min = 0, max = 50))]
    pub experience: i32,
    pub image: Option<String>,
    pub is_available: Option<bool>,
}

impl IntoRecord<Stylist> for CreateStylist {
    fn into_record(self, id: DbId, _now: Timestamp) -> Stylist {
        Stylist {
            id,
            name: self.name,
            specialization: self.specialization,
            experience: self.experience,
            image: self.image,
            is_available: self.is_available.unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStylist {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub specialization: Option<String>,
    #[validate(range(min = 0, max = 50))]
    pub experience: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub image: Option<Option<String>>,
    pub is_available: Option<bool>,
}

impl Patch<Stylist> for UpdateStylist {
    fn apply(self, stylist: &mut Stylist) {
        if let Some(name) = self.name {
            stylist.name = name;
        }
        if let Some(specialization) = self.specialization {
            stylist.specialization = specialization;
        }
        if let Some(experience) = self.experience {
            stylist.experience = experience;
        }
        if let Some(image) = self.image {
            stylist.image = image;
        }
        if let Some(is_available) = self.is_available {
            stylist.is_available = is_available;
        }
    }
}
