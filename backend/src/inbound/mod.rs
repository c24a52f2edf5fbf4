//! Inbound adapters that translate external requests into domain service
//! calls while keeping framework details at the edge.
//!
//! REST endpoints live under [`http`]; the order event stream is served by
//! [`ws`].

pub mod http;
pub mod ws;
