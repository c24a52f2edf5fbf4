//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`OrderEventPublisher`]) are implemented by
//! outbound adapters. Driving ports ([`OrderCommand`], [`OrderQuery`],
//! [`ProductQuery`]) are implemented by domain services and consumed by
//! inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod order_command;
mod order_events;
mod order_query;
mod order_repository;
mod product_query;
mod product_repository;

#[cfg(test)]
pub use order_command::MockOrderCommand;
pub use order_command::{OrderCommand, UpdateOrderPriorityRequest, UpdateOrderStatusRequest};
#[cfg(test)]
pub use order_events::MockOrderEventPublisher;
pub use order_events::{OrderEventPublisher, OrderEventReceiver, OrderEventSource};
#[cfg(test)]
pub use order_query::MockOrderQuery;
pub use order_query::OrderQuery;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
pub use order_repository::{OrderRepository, OrderRepositoryError};
#[cfg(test)]
pub use product_query::MockProductQuery;
pub use product_query::ProductQuery;
#[cfg(test)]
pub use product_repository::MockProductRepository;
pub use product_repository::{ProductRepository, ProductRepositoryError};
