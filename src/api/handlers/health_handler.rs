//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::services::ServiceStatus;

/// Liveness response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = true)]
    pub ok: bool,
}

/// Readiness response
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadinessResponse {
    /// `ready` or `degraded`
    #[schema(example = "ready")]
    pub status: String,
    pub services: StoreStatuses,
}

/// Individual store status.
#[derive(Debug, Serialize, ToSchema)]
pub struct StoreStatuses {
    pub database: ServiceStatus,
}

/// Liveness check. Never touches a store.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Process is alive", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// Readiness check - verifies relational store connectivity.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "Health",
    responses(
        (status = 200, description = "All stores reachable", body = ReadinessResponse),
        (status = 503, description = "A store is unreachable", body = ReadinessResponse)
    )
)]
pub async fn ready(State(state): State<AppState>) -> Response {
    let database = state.health_service.database().await;
    let all_healthy = database.is_healthy();

    let response = ReadinessResponse {
        status: if all_healthy { "ready" } else { "degraded" }.to_string(),
        services: StoreStatuses { database },
    };

    if all_healthy {
        (StatusCode::OK, Json(response)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
    }
}
