//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use crate::outbound::notifications::BroadcastHub;
use crate::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) events: BroadcastHub,
}

impl ServerConfig {
    /// Construct a server configuration around the shared database pool.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self {
            bind_addr,
            db_pool,
            events: BroadcastHub::default(),
        }
    }

    /// Replace the event hub, e.g. to size per-subscriber buffers.
    #[must_use]
    pub fn with_event_hub(mut self, events: BroadcastHub) -> Self {
        self.events = events;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
