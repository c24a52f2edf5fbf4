//! Order management backend for a food-service point of sale.
//!
//! The crate follows a hexagonal layout: [`domain`] owns order and product
//! types plus the ports they are driven through, [`inbound`] exposes them
//! over REST and WebSocket, and [`outbound`] provides the PostgreSQL and
//! broadcast adapters. [`server`] wires everything into an Actix
//! application.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;
