//! Product domain entity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product as exposed by the catalog listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Product identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Display name
    #[schema(example = "Mechanical Keyboard")]
    pub name: String,
    /// Unit price, serialized as a decimal string
    #[schema(value_type = String, example = "89.90")]
    pub price: Decimal,
    /// Units in stock
    #[schema(example = 25)]
    pub stock: i32,
    /// Owning category, if any
    #[schema(example = 2)]
    pub category_id: Option<i32>,
}
