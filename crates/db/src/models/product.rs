//! Retail products sold at the salon.

use rust_decimal::Decimal;
use salon_core::types::{deserialize_nullable, DbId, Timestamp};
use salon_core::validation::{validate_price, validate_rating};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::repository::{IntoRecord, Patch, Record};

/// Rating given to products and gallery entries that do not supply one.
pub const DEFAULT_RATING: Decimal = Decimal::from_parts(50, 0, 0, false, 1);

/// A product. Only in-stock products appear in the listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    /// Pre-discount price, shown struck through when present.
    pub original_price: Option<Decimal>,
    pub category: String,
    pub image: Option<String>,
    pub in_stock: bool,
    pub rating: Decimal,
    pub is_new: bool,
    pub is_best_seller: bool,
}

impl Record for Product {
    const ENTITY: &'static str = "Product";

    fn id(&self) -> DbId {
        self.id
    }

    fn is_visible(&self) -> bool {
        self.in_stock
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
    #[validate(custom(function = "validate_price"))]
    pub original_price: Option<Decimal>,
    #[validate(length(min = 1))]
    pub category: String,
    pub image: Option<String>,
    pub in_stock: Option<bool>,
    #[validate(custom(function = "validate_rating"))]
    pub rating: Option<Decimal>,
    pub is_new: Option<bool>,
    pub is_best_seller: Option<bool>,
}

impl IntoRecord<Product> for CreateProduct {
    fn into_record(self, id: DbId, _now: Timestamp) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            original_price: self.original_price,
            category: self.category,
            image: self.image,
            in_stock: self.in_stock.unwrap_or(true),
            rating: self.rating.unwrap_or(DEFAULT_RATING),
            is_new: self.is_new.unwrap_or(false),
            is_best_seller: self.is_best_seller.unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "validate_price"))]
    pub price: Option<Decimal>,
    #[validate(custom(function = "validate_price"))]
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub original_price: Option<Option<Decimal>>,
    #[validate(length(min = 1))]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub image: Option<Option<String>>,
    pub in_stock: Option<bool>,
    #[validate(custom(function = "validate_rating"))]
    pub rating: Option<Decimal>,
    pub is_new: Option<bool>,
    pub is_best_seller: Option<bool>,
}

impl Patch<Product> for UpdateProduct {
    fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(original_price) = self.original_price {
            product.original_price = original_price;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(in_stock) = self.in_stock {
            product.in_stock = in_stock;
        }
        if let Some(rating) = self.rating {
            product.rating = rating;
        }
        if let Some(is_new) = self.is_new {
            product.is_new = is_new;
        }
        if let Some(is_best_seller) = self.is_best_seller {
            product.is_best_seller = is_best_seller;
        }
    }
}
