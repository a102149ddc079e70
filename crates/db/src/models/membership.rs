//! Membership tiers (Basic, Gold, Platinum).

use rust_decimal::Decimal;
use salon_core::types::{DbId, Timestamp};
use salon_core::validation::validate_price;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::repository::{IntoRecord, Record};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub id: DbId,
    pub name: String,
    pub price: Decimal,
    /// Benefit lines, displayed in order.
    pub benefits: Vec<String>,
    /// Discount on services, in percent.
    pub discount: i32,
    pub is_popular: bool,
}

impl Record for Membership {
    const ENTITY: &'static str = "Membership";

    fn id(&self) -> DbId {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMembership {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
    pub benefits: Vec<String>,
    #[validate(range(min = 0, max = 100))]
    pub discount: i32,
    pub is_popular: Option<bool>,
}

impl IntoRecord<Membership> for CreateMembership {
    fn into_record(self, id: DbId, _now: Timestamp) -> Membership {
        Membership {
            id,
            name: self.name,
            price: self.price,
            benefits: self.benefits,
            discount: self.discount,
            is_popular: self.is_popular.unwrap_or(false),
        }
    }
}
