//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.
//! Tables are created by the SQL seed files, not by migrations.

pub mod category;
pub mod customer;
pub mod event;
pub mod order;
pub mod order_item;
pub mod product;

// Re-exports for public API convenience
pub use category::Entity as CategoryEntity;
pub use customer::Entity as CustomerEntity;
pub use event::Entity as EventEntity;
pub use order::Entity as OrderEntity;
pub use order_item::Entity as OrderItemEntity;
pub use product::{Entity as ProductEntity, Model as ProductModel};
