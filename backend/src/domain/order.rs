//! Order aggregate and its value types.
//!
//! Orders hold a denormalised snapshot of the products sold: line items copy
//! the product id, name and price at sale time and are never reconciled with
//! the catalogue afterwards.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Store-assigned order identifier. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct OrderId(i32);

impl OrderId {
    /// Validate and wrap a raw identifier.
    pub fn new(raw: i32) -> Result<Self, OrderValidationError> {
        if raw <= 0 {
            return Err(OrderValidationError::NonPositiveId(raw));
        }
        Ok(Self(raw))
    }

    /// Raw value for persistence adapters.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Waiting on the kitchen queue.
    Pending,
    /// Served; no longer shown on the kitchen display.
    Completed,
}

impl OrderStatus {
    /// Wire and storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            other => Err(OrderValidationError::UnknownStatus(other.to_owned())),
        }
    }
}

/// Snapshot of a product at the moment it was sold.
///
/// `price` keeps the JSON number shape the till sent, unlike the
/// string-encoded decimals on order and product rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Referenced product id. Not enforced against the catalogue.
    pub id: i32,
    /// Product name at sale time.
    pub name: String,
    /// Product price at sale time.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Validation failures raised by order constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderValidationError {
    /// Identifiers are assigned by a `SERIAL` column and start at 1.
    #[error("order id must be positive, got {0}")]
    NonPositiveId(i32),
    /// Status outside the `pending`/`completed` enum.
    #[error("unknown order status: {0}")]
    UnknownStatus(String),
    /// Totals cannot be negative.
    #[error("total price must not be negative, got {0}")]
    NegativeTotal(Decimal),
    /// Line item prices cannot be negative.
    #[error("line item {index} has a negative price")]
    NegativeItemPrice {
        /// Position of the offending item.
        index: usize,
    },
}

/// Input for a new order. The store assigns id, status, priority and
/// timestamp on insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    items: Vec<LineItem>,
    total_price: Decimal,
}

impl NewOrder {
    /// Validate a new order request.
    ///
    /// # Examples
    /// ```
    /// use pos_backend::domain::{LineItem, NewOrder};
    /// use rust_decimal::Decimal;
    ///
    /// let price = Decimal::new(600, 2);
    /// let order = NewOrder::new(
    ///     vec![LineItem { id: 1, name: "Pizza Fritta".into(), price }],
    ///     price,
    /// )
    /// .expect("valid order");
    /// assert_eq!(order.items().len(), 1);
    /// ```
    pub fn new(items: Vec<LineItem>, total_price: Decimal) -> Result<Self, OrderValidationError> {
        if total_price.is_sign_negative() && !total_price.is_zero() {
            return Err(OrderValidationError::NegativeTotal(total_price));
        }
        if let Some(index) = items
            .iter()
            .position(|item| item.price.is_sign_negative() && !item.price.is_zero())
        {
            return Err(OrderValidationError::NegativeItemPrice { index });
        }
        Ok(Self { items, total_price })
    }

    /// Items being sold.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Total charged for the order.
    pub fn total_price(&self) -> Decimal {
        self.total_price
    }
}

/// Raw field bundle used to rebuild an [`Order`] from storage.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    /// Stored identifier.
    pub id: i32,
    /// Stored line items.
    pub items: Vec<LineItem>,
    /// Stored total.
    pub total_price: Decimal,
    /// Stored status text.
    pub status: String,
    /// Stored priority score.
    pub priority_score: i32,
    /// Insertion timestamp.
    pub created_at: NaiveDateTime,
}

/// A persisted order.
///
/// Serialises with the snake_case field names point-of-sale clients
/// expect; `total_price` is a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    id: OrderId,
    items: Vec<LineItem>,
    total_price: Decimal,
    status: OrderStatus,
    priority_score: i32,
    created_at: NaiveDateTime,
}

impl Order {
    /// Build an order from stored values, validating the status enum.
    pub fn new(draft: OrderDraft) -> Result<Self, OrderValidationError> {
        let OrderDraft {
            id,
            items,
            total_price,
            status,
            priority_score,
            created_at,
        } = draft;

        Ok(Self {
            id: OrderId::new(id)?,
            items,
            total_price,
            status: status.parse()?,
            priority_score,
            created_at,
        })
    }

    /// Identifier.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Line item snapshot.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Total charged.
    pub fn total_price(&self) -> Decimal {
        self.total_price
    }

    /// Current lifecycle state.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Kitchen priority; higher is served first.
    pub fn priority_score(&self) -> i32 {
        self.priority_score
    }

    /// Insertion timestamp.
    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }
}
