//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `seed` - Relational seed loading
//! - `graph` - Graph schema, reset and sync

pub mod args;

pub use args::{Cli, Commands};
