//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using `sqlx`.
//! - **notifications**: in-memory broadcast of order events.
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub mod notifications;
pub mod persistence;
