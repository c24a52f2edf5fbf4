//! Shared WebSocket adapter state.
//!
//! The entry point depends on the [`OrderEventSource`] port rather than the
//! concrete broadcast hub, so sessions can be driven by any event source.

use std::sync::Arc;

use crate::domain::ports::OrderEventSource;

/// Dependency bundle for WebSocket handlers.
#[derive(Clone)]
pub struct WsState {
    pub events: Arc<dyn OrderEventSource>,
}

impl WsState {
    /// Construct state from explicit port implementations.
    pub fn new(events: Arc<dyn OrderEventSource>) -> Self {
        Self { events }
    }
}
