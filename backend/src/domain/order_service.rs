//! Order domain services.
//!
//! These services implement the order driving ports. Each call runs exactly
//! one repository operation; mutations publish their event only after the
//! repository reports success.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{
    OrderCommand, OrderEventPublisher, OrderQuery, OrderRepository, OrderRepositoryError,
    UpdateOrderPriorityRequest, UpdateOrderStatusRequest,
};
use crate::domain::{Error, NewOrder, Order, OrderEvent, OrderId};

pub(crate) const ORDER_NOT_FOUND: &str = "Order not found";

/// Collapse a repository failure into a static client-facing message.
///
/// The adapter error is logged; only `message` reaches the client.
fn map_repository_error(
    operation: &'static str,
    message: &'static str,
) -> impl FnOnce(OrderRepositoryError) -> Error {
    move |err| {
        match &err {
            OrderRepositoryError::Connection { .. } => {
                error!(operation, error = %err, "order repository unavailable");
            }
            OrderRepositoryError::Query { .. } => {
                error!(operation, error = %err, "order repository query failed");
            }
        }
        Error::internal(message)
    }
}

fn not_found(id: OrderId) -> Error {
    info!(order_id = id.get(), "order not found");
    Error::not_found(ORDER_NOT_FOUND)
}

/// Order service implementing the command driving port.
#[derive(Clone)]
pub struct OrderCommandService<R, P> {
    order_repo: Arc<R>,
    events: Arc<P>,
}

impl<R, P> OrderCommandService<R, P> {
    /// Create a new command service from the order repository and event
    /// publisher.
    pub fn new(order_repo: Arc<R>, events: Arc<P>) -> Self {
        Self { order_repo, events }
    }
}

#[async_trait]
impl<R, P> OrderCommand for OrderCommandService<R, P>
where
    R: OrderRepository,
    P: OrderEventPublisher,
{
    async fn create_order(&self, order: NewOrder) -> Result<Order, Error> {
        let created = self
            .order_repo
            .insert(&order)
            .await
            .map_err(map_repository_error("create_order", "Failed to create order"))?;

        info!(order_id = created.id().get(), "order created");
        self.events.publish(OrderEvent::Created(created.clone()));
        Ok(created)
    }

    async fn update_status(&self, request: UpdateOrderStatusRequest) -> Result<Order, Error> {
        let UpdateOrderStatusRequest { id, status } = request;
        let updated = self
            .order_repo
            .update_status(id, status)
            .await
            .map_err(map_repository_error("update_status", "Failed to update order"))?
            .ok_or_else(|| not_found(id))?;

        info!(order_id = id.get(), status = status.as_str(), "order status updated");
        self.events.publish(OrderEvent::Updated(updated.clone()));
        Ok(updated)
    }

    async fn update_priority(&self, request: UpdateOrderPriorityRequest) -> Result<Order, Error> {
        let UpdateOrderPriorityRequest { id, score } = request;
        let updated = self
            .order_repo
            .update_priority(id, score)
            .await
            .map_err(map_repository_error("update_priority", "Failed to update priority"))?
            .ok_or_else(|| not_found(id))?;

        info!(order_id = id.get(), score, "order priority updated");
        self.events.publish(OrderEvent::PriorityChanged(updated.clone()));
        Ok(updated)
    }

    async fn delete_order(&self, id: OrderId) -> Result<(), Error> {
        let deleted = self
            .order_repo
            .delete(id)
            .await
            .map_err(map_repository_error("delete_order", "Failed to delete order"))?;

        if !deleted {
            return Err(not_found(id));
        }

        info!(order_id = id.get(), "order deleted");
        self.events.publish(OrderEvent::Deleted(id));
        Ok(())
    }
}

/// Order service implementing the query driving port.
#[derive(Clone)]
pub struct OrderQueryService<R> {
    order_repo: Arc<R>,
}

impl<R> OrderQueryService<R> {
    /// Create a new query service with the order repository.
    pub fn new(order_repo: Arc<R>) -> Self {
        Self { order_repo }
    }
}

#[async_trait]
impl<R> OrderQuery for OrderQueryService<R>
where
    R: OrderRepository,
{
    async fn list_active_orders(&self) -> Result<Vec<Order>, Error> {
        self.order_repo
            .list_pending()
            .await
            .map_err(map_repository_error("list_active_orders", "Failed to fetch orders"))
    }
}

#[cfg(test)]
#[path = "order_service_tests.rs"]
mod tests;
