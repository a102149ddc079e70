//! Sample catalog loaded at startup.
//!
//! The fixtures are fixed, so every fresh store seeds identically: 4
//! services, 4 stylists, 4 products, 3 memberships and 3 gallery entries.
//! Bookings start empty.

use rust_decimal::Decimal;

use crate::error::StoreError;
use crate::models::gallery::CreateGalleryEntry;
use crate::models::membership::CreateMembership;
use crate::models::product::{CreateProduct, DEFAULT_RATING};
use crate::models::service::CreateService;
use crate::models::stylist::CreateStylist;
use crate::Store;

const UNSPLASH: &str = "https://images.unsplash.com";

const HAIR_MAKEOVER_IMAGE: &str = "https://pixabay.com/get/g40ada6228493e17bc5c8044ac407e78e3e54dd21e19720f8d6cc07dab4f555f1ce7f5a54a5e559bdf7c3d92956e7f345055940d2bc9ff6fc64c1ba45b963f72e_1280.jpg";

fn image(path: &str, w: u32, h: u32) -> Option<String> {
    Some(format!(
        "{UNSPLASH}/{path}?ixlib=rb-4.0.3&auto=format&fit=crop&w={w}&h={h}"
    ))
}

fn service(
    name: &str,
    description: &str,
    price: i64,
    duration: i32,
    category: &str,
    photo: &str,
) -> CreateService {
    CreateService {
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::from(price),
        duration,
        category: category.to_string(),
        image: image(photo, 600, 600),
        is_active: Some(true),
    }
}

fn stylist(name: &str, specialization: &str, experience: i32, photo: &str) -> CreateStylist {
    CreateStylist {
        name: name.to_string(),
        specialization: specialization.to_string(),
        experience,
        image: image(photo, 300, 300),
        is_available: Some(true),
    }
}

fn product(
    name: &str,
    description: &str,
    price: i64,
    original_price: Option<i64>,
    category: &str,
    photo: &str,
    (is_new, is_best_seller): (bool, bool),
) -> CreateProduct {
    CreateProduct {
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::from(price),
        original_price: original_price.map(Decimal::from),
        category: category.to_string(),
        image: image(photo, 600, 600),
        in_stock: Some(true),
        rating: Some(DEFAULT_RATING),
        is_new: Some(is_new),
        is_best_seller: Some(is_best_seller),
    }
}

fn membership(
    name: &str,
    price: i64,
    benefits: [&str; 3],
    discount: i32,
    popular: bool,
) -> CreateMembership {
    CreateMembership {
        name: name.to_string(),
        price: Decimal::from(price),
        benefits: benefits.iter().map(|b| b.to_string()).collect(),
        discount,
        is_popular: Some(popular),
    }
}

fn gallery(
    title: &str,
    description: &str,
    image_url: Option<String>,
    category: &str,
    client_name: &str,
) -> CreateGalleryEntry {
    CreateGalleryEntry {
        title: title.to_string(),
        description: description.to_string(),
        before_image: None,
        after_image: None,
        image: image_url,
        category: category.to_string(),
        client_name: Some(client_name.to_string()),
        rating: Some(DEFAULT_RATING),
    }
}

/// Insert the sample catalog into `store`.
pub fn seed_catalog(store: &Store) -> Result<(), StoreError> {
    for s in [
        service(
            "Hair Styling & Cut",
            "Premium cuts, coloring, and treatments by master stylists",
            2500,
            120,
            "Hair",
            "photo-1562322140-8baeececf3df",
        ),
        service(
            "Spa Treatment",
            "Rejuvenating facials and therapeutic body treatments",
            1800,
            90,
            "Spa",
            "photo-1544161515-4ab6ce6db874",
        ),
        service(
            "Bridal Makeup",
            "Complete bridal packages for your special day",
            15000,
            180,
            "Bridal",
            "photo-1487412947147-5cebf100ffc2",
        ),
        service(
            "Nail Care",
            "Artistic nail designs and premium care treatments",
            800,
            60,
            "Nails",
            "photo-1604654894610-df63bc536371",
        ),
    ] {
        store.services.insert(s)?;
    }

    for s in [
        stylist("Tanish Kumar", "Master Stylist", 15, "photo-1507003211169-0a1dd7228f2d"),
        stylist("Priya Sharma", "Hair Specialist", 8, "photo-1494790108755-2616c2d5b2a4"),
        stylist("Meera Patel", "Bridal Expert", 12, "photo-1438761681033-6461ffad8d80"),
        stylist("Rahul Singh", "Color Specialist", 10, "photo-1472099645785-5658abf4ff4e"),
    ] {
        store.stylists.insert(s)?;
    }

    for p in [
        product(
            "Premium Hair Care Set",
            "Professional-grade shampoo, conditioner & serum",
            2400,
            Some(3000),
            "Hair Care",
            "photo-1556228720-195a672e8a03",
            (false, true),
        ),
        product(
            "Radiance Skincare Kit",
            "Anti-aging serum, moisturizer & face mask",
            3200,
            None,
            "Skincare",
            "photo-1620916566398-39f1143ab7be",
            (true, false),
        ),
        product(
            "Pro Makeup Brush Set",
            "12-piece professional brush collection",
            1800,
            None,
            "Makeup",
            "photo-1596462502278-27bfdc403348",
            (false, false),
        ),
        product(
            "Nail Care Essentials",
            "Base coat, top coat & strengthening treatment",
            1200,
            None,
            "Nail Care",
            "photo-1522335789203-aabd1fc54bc9",
            (false, true),
        ),
    ] {
        store.products.insert(p)?;
    }

    for m in [
        membership(
            "Basic",
            2999,
            ["10% discount on services", "Priority booking", "Birthday special offer"],
            10,
            false,
        ),
        membership(
            "Gold",
            5999,
            ["20% discount on services", "Free monthly consultation", "Exclusive event invites"],
            20,
            true,
        ),
        membership(
            "Platinum",
            9999,
            ["30% discount on services", "VIP lounge access", "Personal beauty advisor"],
            30,
            false,
        ),
    ] {
        store.memberships.insert(m)?;
    }

    for g in [
        gallery(
            "Complete Hair Makeover",
            "Absolutely stunning results! The team transformed my look completely.",
            Some(HAIR_MAKEOVER_IMAGE.to_string()),
            "Hair Styling",
            "Sarah M.",
        ),
        gallery(
            "Bridal Perfection",
            "My dream wedding look came to life. Flawless execution!",
            image("photo-1522337660859-02fbefca4702", 800, 600),
            "Bridal",
            "Priya K.",
        ),
        gallery(
            "Radiant Skin Treatment",
            "My skin has never looked better. The glow is incredible!",
            image("photo-1616394584738-fc6e612e71b9", 800, 600),
            "Skincare",
            "Meera S.",
        ),
    ] {
        store.gallery.insert(g)?;
    }

    tracing::info!(
        services = store.services.len()?,
        stylists = store.stylists.len()?,
        products = store.products.len()?,
        memberships = store.memberships.len()?,
        gallery = store.gallery.len()?,
        "Sample catalog seeded"
    );
    Ok(())
}
