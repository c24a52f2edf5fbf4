//! Domain primitives, aggregates and services.
//!
//! Purpose: define the strongly typed order and product model used by the
//! HTTP, WebSocket and persistence adapters, plus the services that
//! implement the driving ports.
//!
//! Public surface:
//! - Error / ErrorCode: transport agnostic failure payload.
//! - Product: catalogue read model.
//! - Order, NewOrder, LineItem, OrderId, OrderStatus: order aggregate.
//! - OrderEvent: change notification published after mutations.
//! - OrderCommandService, OrderQueryService, ProductQueryService: driving
//!   port implementations.

pub mod error;
pub mod order;
pub mod order_event;
pub mod order_service;
pub mod ports;
pub mod product;
pub mod product_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::order::{
    LineItem, NewOrder, Order, OrderDraft, OrderId, OrderStatus, OrderValidationError,
};
pub use self::order_event::OrderEvent;
pub use self::order_service::{OrderCommandService, OrderQueryService};
pub use self::product::Product;
pub use self::product_service::ProductQueryService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use pos_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("Order not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
