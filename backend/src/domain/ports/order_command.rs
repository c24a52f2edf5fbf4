//! Driving port for order mutations.
//!
//! Inbound adapters validate raw input into these requests before calling
//! the port, so implementations only deal with well-typed values.

use async_trait::async_trait;

use crate::domain::{Error, NewOrder, Order, OrderId, OrderStatus};

/// Request to change an order's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOrderStatusRequest {
    pub id: OrderId,
    pub status: OrderStatus,
}

/// Request to change an order's kitchen priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOrderPriorityRequest {
    pub id: OrderId,
    pub score: i32,
}

/// Domain use-case port for creating, updating and removing orders.
///
/// Every successful call publishes exactly one order event; failures and
/// not-found outcomes publish nothing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderCommand: Send + Sync {
    /// Store a new order and announce it as `order:new`.
    async fn create_order(&self, order: NewOrder) -> Result<Order, Error>;

    /// Change status and announce it as `order:updated`.
    async fn update_status(&self, request: UpdateOrderStatusRequest) -> Result<Order, Error>;

    /// Change priority and announce it as `order:priority_changed`.
    async fn update_priority(&self, request: UpdateOrderPriorityRequest) -> Result<Order, Error>;

    /// Remove an order and announce it as `order:deleted`.
    async fn delete_order(&self, id: OrderId) -> Result<(), Error>;
}
