//! Health service - store connectivity checks for readiness.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use utoipa::ToSchema;

use crate::infra::Database;

/// Service status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ServiceStatus {
    /// `healthy` or `unhealthy`
    #[schema(example = "healthy")]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ServiceStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            error: None,
        }
    }

    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self {
            status: "unhealthy".to_string(),
            error: Some(error.into()),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.error.is_none()
    }
}

/// Health service trait for dependency injection.
#[async_trait]
pub trait HealthService: Send + Sync {
    /// Check relational store connectivity
    async fn database(&self) -> ServiceStatus;
}

/// Pings the relational store, bounded by the store timeout.
pub struct StoreHealth {
    database: Arc<Database>,
    timeout: Duration,
}

impl StoreHealth {
    pub fn new(database: Arc<Database>, timeout: Duration) -> Self {
        Self { database, timeout }
    }
}

#[async_trait]
impl HealthService for StoreHealth {
    async fn database(&self) -> ServiceStatus {
        match tokio::time::timeout(self.timeout, self.database.ping()).await {
            Ok(Ok(())) => ServiceStatus::healthy(),
            Ok(Err(e)) => ServiceStatus::unhealthy(e.to_string()),
            Err(_) => ServiceStatus::unhealthy(format!("ping timed out after {:?}", self.timeout)),
        }
    }
}
