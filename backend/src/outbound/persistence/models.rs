//! Row structs decoded by the `sqlx` repository adapters.
//!
//! These types mirror the table columns and stay internal to the
//! persistence layer; repositories convert them into domain values.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::FromRow;
use sqlx::types::Json;

use crate::domain::{LineItem, Order, OrderDraft, OrderValidationError, Product};

/// Column default for `products.color`, also used for rows stored as NULL.
const DEFAULT_PRODUCT_COLOR: &str = "#333333";

/// Columns selected from `products`.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct ProductRow {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub color: Option<String>,
    pub image_url: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            color: row
                .color
                .unwrap_or_else(|| DEFAULT_PRODUCT_COLOR.to_owned()),
            image_url: row.image_url,
        }
    }
}

/// Columns selected or returned from `orders`.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct OrderRow {
    pub id: i32,
    pub items: Json<Vec<LineItem>>,
    pub total_price: Decimal,
    pub status: String,
    pub priority_score: i32,
    pub created_at: NaiveDateTime,
}

impl TryFrom<OrderRow> for Order {
    type Error = OrderValidationError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        Self::new(OrderDraft {
            id: row.id,
            items: row.items.0,
            total_price: row.total_price,
            status: row.status,
            priority_score: row.priority_score,
            created_at: row.created_at,
        })
    }
}
