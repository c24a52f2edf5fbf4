//! PostgreSQL persistence adapters using `sqlx`.
//!
//! This module provides concrete implementations of the domain repository
//! ports backed by PostgreSQL.
//!
//! # Architecture
//!
//! - **Thin adapters**: repositories only translate between row structs and
//!   domain types. No business logic resides here.
//! - **Internal models**: row structs (`models.rs`) never leave this module.
//! - **Explicit pooling**: a [`DbPool`] is built at startup and cloned into
//!   each repository.
//! - **Strongly typed errors**: `sqlx` failures are mapped to the port
//!   error enums.
//!
//! # Example
//!
//! ```no_run
//! use pos_backend::outbound::persistence::{DbPool, PoolConfig, PostgresOrderRepository};
//!
//! # async fn wire() -> Result<(), pos_backend::outbound::persistence::PoolError> {
//! let pool = DbPool::new(&PoolConfig::new("postgres://localhost/pos"))?;
//! let orders = PostgresOrderRepository::new(pool.clone());
//! # drop(orders);
//! # Ok(())
//! # }
//! ```

mod error_mapping;
mod models;
mod pool;
mod postgres_order_repository;
mod postgres_product_repository;

pub use pool::{DbPool, PoolConfig, PoolError};
pub use postgres_order_repository::PostgresOrderRepository;
pub use postgres_product_repository::PostgresProductRepository;
