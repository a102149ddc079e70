//! Handlers for the `/products` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use salon_db::models::product::{CreateProduct, Product, UpdateProduct};
use salon_db::Record;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::state::AppState;

/// POST /api/products
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state.pool.products.insert(input)?;
    tracing::info!(product_id = product.id, name = %product.name, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/products
///
/// In-stock products only.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(state.pool.products.list_visible()?))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Product>> {
    let product = state
        .pool
        .products
        .find_by_id(id)?
        .ok_or(AppError::not_found(Product::ENTITY, id))?;
    Ok(Json(product))
}

/// PATCH /api/products/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> AppResult<Json<Product>> {
    let product = state
        .pool
        .products
        .update(id, input)?
        .ok_or(AppError::not_found(Product::ENTITY, id))?;
    tracing::info!(product_id = id, in_stock = product.in_stock, "Product updated");
    Ok(Json(product))
}
