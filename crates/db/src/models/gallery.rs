//! Before/after showcase entries.

use rust_decimal::Decimal;
use salon_core::types::{DbId, Timestamp};
use salon_core::validation::validate_rating;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::product::DEFAULT_RATING;
use crate::repository::{IntoRecord, Record};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryEntry {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub before_image: Option<String>,
    pub after_image: Option<String>,
    pub image: Option<String>,
    pub category: String,
    pub client_name: Option<String>,
    pub rating: Decimal,
}

impl Record for GalleryEntry {
    const ENTITY: &'static str = "Gallery item";

    fn id(&self) -> DbId {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGalleryEntry {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
    pub before_image: Option<String>,
    pub after_image: Option<String>,
    pub image: Option<String>,
    #[validate(length(min = 1))]
    pub category: String,
    pub client_name: Option<String>,
    #[validate(custom(function = "validate_rating"))]
    pub rating: Option<Decimal>,
}

impl IntoRecord<GalleryEntry> for CreateGalleryEntry {
    fn into_record(self, id: DbId, _now: Timestamp) -> GalleryEntry {
        GalleryEntry {
            id,
            title: self.title,
            description: self.description,
            before_image: self.before_image,
            after_image: self.after_image,
            image: self.image,
            category: self.category,
            client_name: self.client_name,
            rating: self.rating.unwrap_or(DEFAULT_RATING),
        }
    }
}
