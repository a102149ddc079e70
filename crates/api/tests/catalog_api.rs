//! HTTP-level integration tests for the catalog endpoints: services,
//! stylists, products, memberships and gallery.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

#[tokio::test]
async fn seeded_services_are_listed_in_order() {
    let response = get(common::build_test_app(common::seeded_pool()), "/api/services").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Hair Styling & Cut", "Spa Treatment", "Bridal Makeup", "Nail Care"]
    );
    assert_eq!(json[0]["price"], "2500");
    assert_eq!(json[0]["isActive"], true);
}

#[tokio::test]
async fn unknown_service_returns_404() {
    let response = get(common::build_test_app(common::seeded_pool()), "/api/services/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Service with id 999 not found");
}

#[tokio::test]
async fn create_service_returns_201_with_next_id() {
    let response = post_json(
        common::build_test_app(common::seeded_pool()),
        "/api/services",
        json!({
            "name": "Beard Trim",
            "description": "Shape and line-up",
            "price": "450",
            "duration": 30,
            "category": "Grooming"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["id"], 5);
    assert_eq!(json["isActive"], true);
}

#[tokio::test]
async fn service_with_out_of_range_duration_is_rejected() {
    let response = post_json(
        common::build_test_app(common::seeded_pool()),
        "/api/services",
        json!({
            "name": "Marathon",
            "description": "Too long",
            "price": 100,
            "duration": 600,
            "category": "Spa"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["errors"][0]["field"], "duration");
}

#[tokio::test]
async fn service_price_is_bounded_in_size_and_precision() {
    for price in [json!("100000000"), json!("79228162514264337593543950335"), json!("450.125"), json!(-1)] {
        let response = post_json(
            common::build_test_app(common::seeded_pool()),
            "/api/services",
            json!({
                "name": "Gold Leaf Facial",
                "description": "Priced wrong",
                "price": price,
                "duration": 60,
                "category": "Spa"
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "price {price}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["errors"][0]["field"], "price");
    }
}

#[tokio::test]
async fn null_image_clears_service_image() {
    let pool = common::seeded_pool();
    let response = patch_json(
        common::build_test_app(pool.clone()),
        "/api/services/1",
        json!({"image": "https://cdn.example/cut.jpg"}),
    )
    .await;
    assert_eq!(body_json(response).await["image"], "https://cdn.example/cut.jpg");

    let response = patch_json(
        common::build_test_app(pool.clone()),
        "/api/services/1",
        json!({"image": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["image"].is_null());
    assert_eq!(json["name"], "Hair Styling & Cut");
}

#[tokio::test]
async fn deactivated_service_leaves_listing_but_stays_fetchable() {
    let pool = common::seeded_pool();
    let response = patch_json(
        common::build_test_app(pool.clone()),
        "/api/services/2",
        json!({"isActive": false}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let listed = body_json(get(common::build_test_app(pool.clone()), "/api/services").await).await;
    assert_eq!(listed.as_array().unwrap().len(), 3);
    assert!(listed.as_array().unwrap().iter().all(|s| s["id"] != 2));

    let response = get(common::build_test_app(pool), "/api/services/2").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["isActive"], false);
}

#[tokio::test]
async fn delete_service_returns_204_then_404() {
    let pool = common::seeded_pool();
    let response = delete(common::build_test_app(pool.clone()), "/api/services/4").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(common::build_test_app(pool.clone()), "/api/services/4").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(common::build_test_app(pool), "/api/services/4").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Stylists
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unavailable_stylist_is_hidden_from_listing() {
    let pool = common::seeded_pool();
    let response = patch_json(
        common::build_test_app(pool.clone()),
        "/api/stylists/1",
        json!({"isAvailable": false}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let listed = body_json(get(common::build_test_app(pool), "/api/stylists").await).await;
    let names: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Priya Sharma", "Meera Patel", "Rahul Singh"]);
}

#[tokio::test]
async fn stylist_experience_is_bounded() {
    let response = post_json(
        common::build_test_app(common::seeded_pool()),
        "/api/stylists",
        json!({"name": "Ancient", "specialization": "Everything", "experience": 75}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[tokio::test]
async fn created_product_gets_defaults() {
    let response = post_json(
        common::build_test_app(common::seeded_pool()),
        "/api/products",
        json!({
            "name": "Argan Oil",
            "description": "Cold-pressed",
            "price": 950,
            "category": "Hair Care"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["inStock"], true);
    assert_eq!(json["rating"], "5.0");
    assert_eq!(json["isNew"], false);
    assert_eq!(json["isBestSeller"], false);
}

#[tokio::test]
async fn out_of_stock_product_is_hidden() {
    let pool = common::seeded_pool();
    patch_json(
        common::build_test_app(pool.clone()),
        "/api/products/1",
        json!({"inStock": false}),
    )
    .await;

    let listed = body_json(get(common::build_test_app(pool), "/api/products").await).await;
    assert_eq!(listed.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn product_rating_above_five_is_rejected() {
    let response = post_json(
        common::build_test_app(common::seeded_pool()),
        "/api/products",
        json!({
            "name": "Overrated",
            "description": "Too good",
            "price": 10,
            "category": "Makeup",
            "rating": 6
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["errors"][0]["field"], "rating");
}

#[tokio::test]
async fn product_prices_and_rating_reject_extra_decimals() {
    let pool = common::seeded_pool();
    for body in [
        json!({"price": "9.999"}),
        json!({"originalPrice": "123456789"}),
        json!({"rating": "4.55"}),
    ] {
        let response =
            patch_json(common::build_test_app(pool.clone()), "/api/products/1", body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
    }

    let response = patch_json(
        common::build_test_app(pool),
        "/api/products/1",
        json!({"price": "1299.50", "rating": "4.5"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn null_original_price_ends_a_sale() {
    let pool = common::seeded_pool();
    let response = patch_json(
        common::build_test_app(pool.clone()),
        "/api/products/2",
        json!({"originalPrice": 1500}),
    )
    .await;
    assert_eq!(body_json(response).await["originalPrice"], "1500");

    let response = patch_json(
        common::build_test_app(pool),
        "/api/products/2",
        json!({"originalPrice": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["originalPrice"].is_null());
}

// ---------------------------------------------------------------------------
// Memberships and gallery
// ---------------------------------------------------------------------------

#[tokio::test]
async fn memberships_include_benefits() {
    let response = get(common::build_test_app(common::seeded_pool()), "/api/memberships/2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Gold");
    assert_eq!(json["isPopular"], true);
    assert_eq!(json["benefits"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn membership_discount_is_a_percentage() {
    let response = post_json(
        common::build_test_app(common::seeded_pool()),
        "/api/memberships",
        json!({"name": "Diamond", "price": 19999, "benefits": [], "discount": 120}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn gallery_entry_round_trips() {
    let pool = common::seeded_pool();
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/gallery",
        json!({
            "title": "Balayage Refresh",
            "description": "Soft sun-kissed tones",
            "category": "Hair Styling",
            "clientName": "Anita R."
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["id"], 4);

    let fetched = body_json(get(common::build_test_app(pool), "/api/gallery/4").await).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn empty_store_lists_are_empty() {
    let pool = common::empty_pool();
    for uri in [
        "/api/services",
        "/api/stylists",
        "/api/products",
        "/api/memberships",
        "/api/gallery",
        "/api/bookings",
    ] {
        let response = get(common::build_test_app(pool.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(body_json(response).await, json!([]), "{uri}");
    }
}
