//! Product repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use super::entities::product::{self, Entity as ProductEntity};
use crate::domain::Product;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List every product ordered by id
    async fn list(&self) -> AppResult<Vec<Product>>;
}

/// Concrete implementation of ProductRepository
pub struct ProductStore {
    db: Arc<DatabaseConnection>,
}

impl ProductStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn list(&self) -> AppResult<Vec<Product>> {
        let models = ProductEntity::find()
            .order_by_asc(product::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from_db)?;

        Ok(models.into_iter().map(Product::from).collect())
    }
}
