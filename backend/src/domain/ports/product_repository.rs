//! Port for reading the product catalogue.

use async_trait::async_trait;

use crate::domain::Product;

use super::define_port_error;

define_port_error! {
    /// Errors raised by product repository adapters.
    pub enum ProductRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "product repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "product repository query failed: {message}",
    }
}

/// Read access to seeded products.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products ordered by ascending id.
    async fn list_all(&self) -> Result<Vec<Product>, ProductRepositoryError>;
}
