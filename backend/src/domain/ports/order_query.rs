//! Driving port for the kitchen order queue.

use async_trait::async_trait;

use crate::domain::{Error, Order};

/// Domain use-case port for reading active orders.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderQuery: Send + Sync {
    /// Pending orders in kitchen display sequence.
    async fn list_active_orders(&self) -> Result<Vec<Order>, Error>;
}
