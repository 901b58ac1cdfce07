//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.

pub mod graph;
pub mod seed;
pub mod serve;
