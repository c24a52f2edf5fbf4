//! Port abstraction for order persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{NewOrder, Order, OrderId, OrderStatus};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by order repository adapters.
    pub enum OrderRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "order repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "order repository query failed: {message}",
    }
}

/// Fixed query templates over the `orders` table.
///
/// Each method maps to exactly one statement; adapters must not retry or
/// wrap calls in transactions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Pending orders, highest `priority_score` first, oldest first within a
    /// score.
    async fn list_pending(&self) -> Result<Vec<Order>, OrderRepositoryError>;

    /// Insert an order with status `pending` and priority 0, returning the
    /// stored row.
    async fn insert(&self, order: &NewOrder) -> Result<Order, OrderRepositoryError>;

    /// Set the status of an order. `None` when no row matched.
    async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, OrderRepositoryError>;

    /// Set the priority score of an order. `None` when no row matched.
    async fn update_priority(
        &self,
        id: OrderId,
        score: i32,
    ) -> Result<Option<Order>, OrderRepositoryError>;

    /// Remove an order. `true` only when exactly one row was deleted.
    async fn delete(&self, id: OrderId) -> Result<bool, OrderRepositoryError>;
}
