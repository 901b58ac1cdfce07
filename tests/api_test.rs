//! Integration tests for API endpoints.
//!
//! These tests drive the full router with mock services, so no Postgres
//! connection is required.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;

use shop_graph::api::{create_router, AppState};
use shop_graph::domain::Product;
use shop_graph::errors::{AppError, AppResult};
use shop_graph::services::{HealthService, ProductService, ServiceStatus};

// =============================================================================
// Mock Services for Testing
// =============================================================================

/// Product service backed by a fixed catalog
struct SeededCatalog;

fn seeded_products() -> Vec<Product> {
    let rows = [
        (1, "Wireless Headphones", "79.99", 40, 1),
        (2, "Mechanical Keyboard", "89.90", 25, 1),
        (3, "USB-C Charger", "19.99", 120, 1),
        (4, "Rust in Action", "39.50", 15, 2),
        (5, "Graph Databases", "34.00", 8, 2),
        (6, "Espresso Machine", "249.00", 5, 3),
        (7, "Chef Knife", "59.95", 30, 3),
        (8, "Cast Iron Pan", "44.00", 0, 3),
        (9, "Yoga Mat", "24.99", 60, 4),
        (10, "Running Shoes", "119.00", 18, 4),
    ];

    rows.iter()
        .map(|(id, name, price, stock, category)| Product {
            id: *id,
            name: name.to_string(),
            price: Decimal::from_str(price).unwrap(),
            stock: *stock,
            category_id: Some(*category),
        })
        .collect()
}

#[async_trait]
impl ProductService for SeededCatalog {
    async fn list_products(&self) -> AppResult<Vec<Product>> {
        Ok(seeded_products())
    }
}

/// Product service whose store is down
struct StoppedStore;

#[async_trait]
impl ProductService for StoppedStore {
    async fn list_products(&self) -> AppResult<Vec<Product>> {
        Err(AppError::unavailable("connection refused"))
    }
}

/// Health service with a fixed answer
struct FixedHealth(ServiceStatus);

#[async_trait]
impl HealthService for FixedHealth {
    async fn database(&self) -> ServiceStatus {
        self.0.clone()
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

fn router(products: impl ProductService + 'static, database: ServiceStatus) -> Router {
    create_router(AppState::new(
        Arc::new(products),
        Arc::new(FixedHealth(database)),
    ))
}

fn healthy_app() -> Router {
    router(SeededCatalog, ServiceStatus::healthy())
}

fn stopped_app() -> Router {
    router(StoppedStore, ServiceStatus::unhealthy("connection refused"))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

// =============================================================================
// Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_health_returns_ok() {
    let (status, body) = get(healthy_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "ok": true }));
}

#[tokio::test]
async fn test_health_ignores_store_outage() {
    let (status, body) = get(stopped_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
}

// =============================================================================
// Product Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_products_returns_every_seeded_record() {
    let (status, body) = get(healthy_app(), "/products").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().expect("array body");
    assert_eq!(items.len(), 10);

    let ids: Vec<i64> = items.iter().map(|p| p["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());

    let keyboard = &items[1];
    assert_eq!(keyboard["name"], "Mechanical Keyboard");
    assert_eq!(keyboard["price"], "89.90");
    assert_eq!(keyboard["stock"], 25);
    assert_eq!(keyboard["category_id"], 1);
}

#[tokio::test]
async fn test_products_returns_503_when_store_down() {
    let (status, body) = get(stopped_app(), "/products").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");
    // Connection details stay in the logs
    assert!(!body["error"]["message"]
        .as_str()
        .unwrap_or_default()
        .contains("connection refused"));
}

// =============================================================================
// Readiness Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_ready_when_store_reachable() {
    let (status, body) = get(healthy_app(), "/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_ready_degraded_when_store_down() {
    let (status, body) = get(stopped_app(), "/ready").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["services"]["database"]["status"], "unhealthy");
}

// =============================================================================
// Routing Tests
// =============================================================================

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (status, _) = get(healthy_app(), "/orders").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, body) = get(healthy_app(), "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/products"].is_object());
}
