//! Domain layer - Core business entities
//!
//! This module contains the domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod graph;
pub mod product;

pub use graph::{EventKind, NodeLabel};
pub use product::Product;
