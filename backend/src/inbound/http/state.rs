//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{OrderCommand, OrderQuery, ProductQuery};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub orders: Arc<dyn OrderCommand>,
    pub orders_query: Arc<dyn OrderQuery>,
    pub products: Arc<dyn ProductQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub orders: Arc<dyn OrderCommand>,
    pub orders_query: Arc<dyn OrderQuery>,
    pub products: Arc<dyn ProductQuery>,
}

impl HttpState {
    /// Construct state from a ports bundle.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            orders,
            orders_query,
            products,
        } = ports;
        Self {
            orders,
            orders_query,
            products,
        }
    }
}
