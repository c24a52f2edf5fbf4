//! PostgreSQL-backed `ProductRepository` implementation.

use async_trait::async_trait;

use crate::domain::Product;
use crate::domain::ports::{ProductRepository, ProductRepositoryError};

use super::error_mapping::map_sqlx_error;
use super::models::ProductRow;
use super::pool::DbPool;

const LIST_PRODUCTS: &str = "SELECT id, name, price, color, image_url FROM products ORDER BY id ASC";

/// `sqlx` adapter reading the `products` table.
#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pool: DbPool,
}

impl PostgresProductRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn list_all(&self) -> Result<Vec<Product>, ProductRepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(LIST_PRODUCTS)
            .fetch_all(self.pool.pool())
            .await
            .map_err(|err| {
                map_sqlx_error(
                    err,
                    ProductRepositoryError::query,
                    ProductRepositoryError::connection,
                )
            })?;

        Ok(rows.into_iter().map(Product::from).collect())
    }
}
