//! Product catalogue service implementing [`ProductQuery`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{ProductQuery, ProductRepository};
use crate::domain::{Error, Product};

/// Read-only catalogue service.
#[derive(Clone)]
pub struct ProductQueryService<R> {
    product_repo: Arc<R>,
}

impl<R> ProductQueryService<R> {
    /// Create a new query service with the product repository.
    pub fn new(product_repo: Arc<R>) -> Self {
        Self { product_repo }
    }
}

#[async_trait]
impl<R> ProductQuery for ProductQueryService<R>
where
    R: ProductRepository,
{
    async fn list_products(&self) -> Result<Vec<Product>, Error> {
        // The raw failure text is rendered as `internalError`.
        self.product_repo.list_all().await.map_err(|err| {
            error!(error = %err, "product listing failed");
            Error::internal("Failed to fetch products").with_cause(err.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{MockProductRepository, ProductRepositoryError};

    #[tokio::test]
    async fn list_products_returns_repository_rows() {
        let rows = vec![Product {
            id: 1,
            name: "Pizza Fritta".to_owned(),
            price: dec!(6.00),
            color: "#FF6B6B".to_owned(),
            image_url: None,
        }];
        let expected = rows.clone();

        let mut repo = MockProductRepository::new();
        repo.expect_list_all().times(1).return_once(move || Ok(rows));

        let products = ProductQueryService::new(Arc::new(repo))
            .list_products()
            .await
            .expect("products listed");

        assert_eq!(products, expected);
    }

    #[tokio::test]
    async fn list_products_exposes_underlying_cause() {
        let mut repo = MockProductRepository::new();
        repo.expect_list_all().times(1).return_once(|| {
            Err(ProductRepositoryError::query(
                "relation \"products\" does not exist",
            ))
        });

        let err = ProductQueryService::new(Arc::new(repo))
            .list_products()
            .await
            .expect_err("query fails");

        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(err.message(), "Failed to fetch products");
        assert_eq!(
            err.cause(),
            Some("product repository query failed: relation \"products\" does not exist")
        );
    }
}
