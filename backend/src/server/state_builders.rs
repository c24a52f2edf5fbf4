//! Builders wiring driven adapters into the handler state bundles.

use std::sync::Arc;

use crate::domain::ports::{
    OrderEventPublisher, OrderEventSource, OrderRepository, ProductRepository,
};
use crate::domain::{OrderCommandService, OrderQueryService, ProductQueryService};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::inbound::ws::state::WsState;

/// Build HTTP state from repository and publisher adapters.
///
/// The command and query services share one order repository so reads
/// observe every committed write.
pub fn build_http_state<O, P, E>(orders: Arc<O>, products: Arc<P>, events: Arc<E>) -> HttpState
where
    O: OrderRepository + 'static,
    P: ProductRepository + 'static,
    E: OrderEventPublisher + 'static,
{
    HttpState::new(HttpStatePorts {
        orders: Arc::new(OrderCommandService::new(orders.clone(), events)),
        orders_query: Arc::new(OrderQueryService::new(orders)),
        products: Arc::new(ProductQueryService::new(products)),
    })
}

/// Build WebSocket state from an event source.
pub fn build_ws_state<S>(events: Arc<S>) -> WsState
where
    S: OrderEventSource + 'static,
{
    WsState::new(events)
}
