//! Driving port for the product catalogue.

use async_trait::async_trait;

use crate::domain::{Error, Product};

/// Domain use-case port for listing products at the till.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductQuery: Send + Sync {
    /// All products ordered by id.
    async fn list_products(&self) -> Result<Vec<Product>, Error>;
}
