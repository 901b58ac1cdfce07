//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod base;
pub mod entities;
mod product_repository;

pub use base::{ReadRepository, TableReader};
pub use product_repository::{ProductRepository, ProductStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use product_repository::MockProductRepository;
