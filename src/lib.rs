//! Shop Graph - seeded e-commerce catalog with a Neo4j projection
//!
//! A relational seed loader, a graph schema initializer and a small HTTP
//! service exposing the product catalog.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities (products, graph labels, event kinds)
//! - **services**: Application use cases
//! - **infra**: Postgres, seed loader, Neo4j, readiness polling
//! - **api**: HTTP handlers and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Seed Postgres, then serve
//! cargo run -- serve --seed
//!
//! # Declare graph constraints and indexes
//! cargo run -- graph init
//!
//! # Copy the relational data into the graph
//! cargo run -- graph sync
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::Product;
pub use errors::{AppError, AppResult};
