//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{HealthService, ProductService, ServiceContainer, Services};

/// Application state shared by every handler.
///
/// The relational pool lives inside the services; nothing here is mutable.
#[derive(Clone)]
pub struct AppState {
    /// Product listing service
    pub product_service: Arc<dyn ProductService>,
    /// Store connectivity checks
    pub health_service: Arc<dyn HealthService>,
}

impl AppState {
    /// Create application state from a database connection and config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let container = Services::from_database(database, config);
        Self::from_container(&container)
    }

    /// Create application state from any service container.
    pub fn from_container(container: &dyn ServiceContainer) -> Self {
        Self {
            product_service: container.products(),
            health_service: container.health(),
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        product_service: Arc<dyn ProductService>,
        health_service: Arc<dyn HealthService>,
    ) -> Self {
        Self {
            product_service,
            health_service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;
    use crate::errors::AppResult;
    use crate::services::{MockServiceContainer, ServiceStatus};
    use async_trait::async_trait;

    struct EmptyCatalog;

    #[async_trait]
    impl ProductService for EmptyCatalog {
        async fn list_products(&self) -> AppResult<Vec<Product>> {
            Ok(Vec::new())
        }
    }

    struct AlwaysHealthy;

    #[async_trait]
    impl HealthService for AlwaysHealthy {
        async fn database(&self) -> ServiceStatus {
            ServiceStatus::healthy()
        }
    }

    #[tokio::test]
    async fn test_from_container_takes_each_service_once() {
        let mut container = MockServiceContainer::new();
        container
            .expect_products()
            .times(1)
            .returning(|| Arc::new(EmptyCatalog) as Arc<dyn ProductService>);
        container
            .expect_health()
            .times(1)
            .returning(|| Arc::new(AlwaysHealthy) as Arc<dyn HealthService>);

        let state = AppState::from_container(&container);

        assert!(state.product_service.list_products().await.unwrap().is_empty());
        assert!(state.health_service.database().await.is_healthy());
    }
}
