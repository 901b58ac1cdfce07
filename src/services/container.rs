//! Service Container - Centralized service access.
//!
//! Holds the service trait objects shared by every request handler.

use std::sync::Arc;

use super::{HealthService, ProductManager, ProductService, StoreHealth};
use crate::config::Config;
use crate::infra::{Database, ProductStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get product service
    fn products(&self) -> Arc<dyn ProductService>;

    /// Get health service
    fn health(&self) -> Arc<dyn HealthService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    product_service: Arc<dyn ProductService>,
    health_service: Arc<dyn HealthService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(
        product_service: Arc<dyn ProductService>,
        health_service: Arc<dyn HealthService>,
    ) -> Self {
        Self {
            product_service,
            health_service,
        }
    }

    /// Create service container from a database and config
    pub fn from_database(database: Arc<Database>, config: &Config) -> Self {
        let repo = Arc::new(ProductStore::new(database.get_connection()));
        let product_service = Arc::new(ProductManager::new(repo, config.store_timeout));
        let health_service = Arc::new(StoreHealth::new(database, config.store_timeout));

        Self {
            product_service,
            health_service,
        }
    }
}

impl ServiceContainer for Services {
    fn products(&self) -> Arc<dyn ProductService> {
        self.product_service.clone()
    }

    fn health(&self) -> Arc<dyn HealthService> {
        self.health_service.clone()
    }
}
