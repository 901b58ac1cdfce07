//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{health_handler, product_handler};
use crate::domain::Product;
use crate::services::ServiceStatus;

/// OpenAPI documentation for the shop graph API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "E-Commerce Graph API",
        version = "0.1.0",
        description = "Product catalog over a seeded PostgreSQL store",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        health_handler::health,
        health_handler::ready,
        product_handler::list_products,
    ),
    components(
        schemas(
            Product,
            ServiceStatus,
            health_handler::HealthResponse,
            health_handler::ReadinessResponse,
            health_handler::StoreStatuses,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and readiness"),
        (name = "Products", description = "Catalog listing")
    )
)]
pub struct ApiDoc;
