//! Application services layer - Use cases.
//!
//! Services orchestrate infrastructure to fulfill application use cases.
//! They depend on abstractions (traits) for dependency inversion.

pub mod container;
mod health_service;
mod product_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use health_service::{HealthService, ServiceStatus, StoreHealth};
pub use product_service::{ProductManager, ProductService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
