//! Base repository trait for read-only table access.
//!
//! The shop tables are written by seed files only, so repositories
//! expose reads. The graph sync reads every table through it.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, FromQueryResult};

use crate::errors::{AppError, AppResult};

/// Read operations (Query)
#[async_trait]
pub trait ReadRepository<E, M>: Send + Sync
where
    E: EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Find all entities
    async fn find_all(&self) -> AppResult<Vec<M>> {
        E::find().all(self.db()).await.map_err(AppError::from_db)
    }
}

/// Generic reader over any table entity
pub struct TableReader {
    db: Arc<DatabaseConnection>,
}

impl TableReader {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Read every row of entity `E`.
    pub async fn all<E>(&self) -> AppResult<Vec<E::Model>>
    where
        E: EntityTrait,
        E::Model: Send + Sync,
    {
        <Self as ReadRepository<E, E::Model>>::find_all(self).await
    }
}

impl<E, M> ReadRepository<E, M> for TableReader
where
    E: EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult,
{
    fn db(&self) -> &DatabaseConnection {
        self.db.as_ref()
    }
}
