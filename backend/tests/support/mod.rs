//! Shared helpers for backend integration tests.
//!
//! Integration tests compile as separate crates, so the in-memory adapters
//! standing in for PostgreSQL live here rather than behind `cfg(test)`.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use pos_backend::domain::ports::{
    OrderRepository, OrderRepositoryError, ProductRepository, ProductRepositoryError,
};
use pos_backend::domain::{NewOrder, Order, OrderDraft, OrderId, OrderStatus, Product};
use rust_decimal::Decimal;

fn epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 1)
        .and_then(|date| date.and_hms_opt(18, 0, 0))
        .unwrap_or_default()
}

#[derive(Default)]
struct OrderTable {
    next_id: i32,
    rows: Vec<Order>,
}

/// Order store mirroring the SQL adapter's ordering and RETURNING semantics.
#[derive(Default)]
pub struct InMemoryOrderRepository {
    table: Mutex<OrderTable>,
}

impl InMemoryOrderRepository {
    fn with_table<T>(
        &self,
        f: impl FnOnce(&mut OrderTable) -> Result<T, OrderRepositoryError>,
    ) -> Result<T, OrderRepositoryError> {
        let mut table = self
            .table
            .lock()
            .map_err(|_| OrderRepositoryError::connection("order table poisoned"))?;
        f(&mut table)
    }

    fn replace(
        &self,
        id: OrderId,
        change: impl FnOnce(&mut OrderDraft),
    ) -> Result<Option<Order>, OrderRepositoryError> {
        self.with_table(|table| {
            let Some(row) = table.rows.iter_mut().find(|row| row.id() == id) else {
                return Ok(None);
            };
            let mut draft = draft_of(row);
            change(&mut draft);
            *row = Order::new(draft).map_err(|err| OrderRepositoryError::query(err.to_string()))?;
            Ok(Some(row.clone()))
        })
    }
}

fn draft_of(order: &Order) -> OrderDraft {
    OrderDraft {
        id: order.id().get(),
        items: order.items().to_vec(),
        total_price: order.total_price(),
        status: order.status().as_str().to_owned(),
        priority_score: order.priority_score(),
        created_at: order.created_at(),
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn list_pending(&self) -> Result<Vec<Order>, OrderRepositoryError> {
        self.with_table(|table| {
            let mut pending: Vec<Order> = table
                .rows
                .iter()
                .filter(|row| row.status() == OrderStatus::Pending)
                .cloned()
                .collect();
            pending.sort_by(|a, b| {
                b.priority_score()
                    .cmp(&a.priority_score())
                    .then(a.created_at().cmp(&b.created_at()))
            });
            Ok(pending)
        })
    }

    async fn insert(&self, order: &NewOrder) -> Result<Order, OrderRepositoryError> {
        self.with_table(|table| {
            table.next_id += 1;
            let id = table.next_id;
            let created = Order::new(OrderDraft {
                id,
                items: order.items().to_vec(),
                total_price: order.total_price(),
                status: OrderStatus::Pending.as_str().to_owned(),
                priority_score: 0,
                created_at: epoch() + TimeDelta::seconds(i64::from(id)),
            })
            .map_err(|err| OrderRepositoryError::query(err.to_string()))?;
            table.rows.push(created.clone());
            Ok(created)
        })
    }

    async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, OrderRepositoryError> {
        self.replace(id, |draft| draft.status = status.as_str().to_owned())
    }

    async fn update_priority(
        &self,
        id: OrderId,
        score: i32,
    ) -> Result<Option<Order>, OrderRepositoryError> {
        self.replace(id, |draft| draft.priority_score = score)
    }

    async fn delete(&self, id: OrderId) -> Result<bool, OrderRepositoryError> {
        self.with_table(|table| {
            let before = table.rows.len();
            table.rows.retain(|row| row.id() != id);
            Ok(table.rows.len() + 1 == before)
        })
    }
}

/// Fixed product catalogue, stored out of id order.
pub struct InMemoryProductRepository {
    products: Vec<Product>,
}

impl InMemoryProductRepository {
    pub fn seeded() -> Self {
        let product = |id: i32, name: &str, cents: i64, color: &str| Product {
            id,
            name: name.to_owned(),
            price: Decimal::new(cents, 2),
            color: color.to_owned(),
            image_url: None,
        };
        Self {
            products: vec![
                product(2, "Montanara", 750, "#4ECDC4"),
                product(1, "Pizza Fritta", 600, "#FF6B6B"),
                product(3, "Crocchè", 250, "#333333"),
            ],
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_all(&self) -> Result<Vec<Product>, ProductRepositoryError> {
        let mut products = self.products.clone();
        products.sort_by_key(|product| product.id);
        Ok(products)
    }
}
