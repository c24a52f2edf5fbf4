//! PostgreSQL-backed `OrderRepository` implementation.
//!
//! Every operation is a single parameterised statement. Mutations use
//! `RETURNING` so the caller receives the stored row without a second read.

use async_trait::async_trait;
use sqlx::types::Json;

use crate::domain::ports::{OrderRepository, OrderRepositoryError};
use crate::domain::{NewOrder, Order, OrderId, OrderStatus};

use super::error_mapping::map_sqlx_error;
use super::models::OrderRow;
use super::pool::DbPool;

const LIST_PENDING: &str = "\
    SELECT id, items, total_price, status, priority_score, created_at \
    FROM orders \
    WHERE status = 'pending' \
    ORDER BY priority_score DESC, created_at ASC";

const INSERT_ORDER: &str = "\
    INSERT INTO orders (items, total_price, priority_score) \
    VALUES ($1, $2, 0) \
    RETURNING id, items, total_price, status, priority_score, created_at";

const UPDATE_STATUS: &str = "\
    UPDATE orders SET status = $1 WHERE id = $2 \
    RETURNING id, items, total_price, status, priority_score, created_at";

const UPDATE_PRIORITY: &str = "\
    UPDATE orders SET priority_score = $1 WHERE id = $2 \
    RETURNING id, items, total_price, status, priority_score, created_at";

const DELETE_ORDER: &str = "DELETE FROM orders WHERE id = $1";

fn map_error(error: sqlx::Error) -> OrderRepositoryError {
    map_sqlx_error(
        error,
        OrderRepositoryError::query,
        OrderRepositoryError::connection,
    )
}

fn into_order(row: OrderRow) -> Result<Order, OrderRepositoryError> {
    Order::try_from(row).map_err(|err| OrderRepositoryError::query(err.to_string()))
}

/// `sqlx` adapter over the `orders` table.
#[derive(Debug, Clone)]
pub struct PostgresOrderRepository {
    pool: DbPool,
}

impl PostgresOrderRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn list_pending(&self) -> Result<Vec<Order>, OrderRepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(LIST_PENDING)
            .fetch_all(self.pool.pool())
            .await
            .map_err(map_error)?;

        rows.into_iter().map(into_order).collect()
    }

    async fn insert(&self, order: &NewOrder) -> Result<Order, OrderRepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(INSERT_ORDER)
            .bind(Json(order.items().to_vec()))
            .bind(order.total_price())
            .fetch_one(self.pool.pool())
            .await
            .map_err(map_error)?;

        into_order(row)
    }

    async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, OrderRepositoryError> {
        sqlx::query_as::<_, OrderRow>(UPDATE_STATUS)
            .bind(status.as_str())
            .bind(id.get())
            .fetch_optional(self.pool.pool())
            .await
            .map_err(map_error)?
            .map(into_order)
            .transpose()
    }

    async fn update_priority(
        &self,
        id: OrderId,
        score: i32,
    ) -> Result<Option<Order>, OrderRepositoryError> {
        sqlx::query_as::<_, OrderRow>(UPDATE_PRIORITY)
            .bind(score)
            .bind(id.get())
            .fetch_optional(self.pool.pool())
            .await
            .map_err(map_error)?
            .map(into_order)
            .transpose()
    }

    async fn delete(&self, id: OrderId) -> Result<bool, OrderRepositoryError> {
        let result = sqlx::query(DELETE_ORDER)
            .bind(id.get())
            .execute(self.pool.pool())
            .await
            .map_err(map_error)?;

        Ok(result.rows_affected() == 1)
    }
}
