//! HTTP request handlers.

pub mod health_handler;
pub mod product_handler;

pub use health_handler::{health, ready};
pub use product_handler::list_products;
