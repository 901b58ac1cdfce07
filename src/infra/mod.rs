//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Relational store connection, ledger migration and repositories
//! - Seed loading
//! - Graph store client, schema initializer and sync
//! - Startup readiness polling

pub mod db;
pub mod graph;
pub mod readiness;
pub mod repositories;
pub mod seed;

pub use db::{Database, Migrator};
pub use graph::{GraphSchema, GraphStore, GraphSync, SyncReport};
pub use readiness::wait_until_ready;
pub use repositories::{ProductRepository, ProductStore, TableReader};
pub use seed::{SeedLoader, SeedReport};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockProductRepository;
