//! Product catalog handlers.

use axum::{extract::State, response::Json};

use crate::api::AppState;
use crate::domain::Product;
use crate::errors::AppResult;

/// List all products
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products ordered by id", body = Vec<Product>),
        (status = 503, description = "Relational store unavailable")
    )
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.product_service.list_products().await?;
    tracing::debug!(count = products.len(), "Listed products");
    Ok(Json(products))
}
