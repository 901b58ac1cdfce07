//! Application route configuration.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{health, list_products, ready};
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness and readiness
        .route("/health", get(health))
        .route("/ready", get(ready))
        // Catalog
        .route("/products", get(list_products))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
