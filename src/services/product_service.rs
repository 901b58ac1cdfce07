//! Product service - catalog listing use case.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::Product;
use crate::errors::{AppError, AppResult};
use crate::infra::ProductRepository;

/// Product service trait for dependency injection.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// List every product. Fails with `Unavailable` when the store cannot
    /// answer within the configured bound.
    async fn list_products(&self) -> AppResult<Vec<Product>>;
}

/// Concrete implementation of ProductService over a repository.
pub struct ProductManager {
    repo: Arc<dyn ProductRepository>,
    timeout: Duration,
}

impl ProductManager {
    /// Create new product service instance
    pub fn new(repo: Arc<dyn ProductRepository>, timeout: Duration) -> Self {
        Self { repo, timeout }
    }
}

#[async_trait]
impl ProductService for ProductManager {
    async fn list_products(&self) -> AppResult<Vec<Product>> {
        match tokio::time::timeout(self.timeout, self.repo.list()).await {
            Ok(result) => result,
            Err(_) => Err(AppError::unavailable(format!(
                "product listing timed out after {:?}",
                self.timeout
            ))),
        }
    }
}
