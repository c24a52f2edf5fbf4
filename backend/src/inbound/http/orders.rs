//! Order HTTP handlers.
//!
//! ```text
//! GET    /api/orders
//! POST   /api/orders
//! PUT    /api/orders/{id}/status
//! PUT    /api/orders/{id}/priority
//! DELETE /api/orders/{id}
//! ```
//!
//! Bodies are deserialised loosely and validated into typed commands before
//! any driving port is called, so invalid input is rejected with 400 and
//! never reaches the database.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::ports::{UpdateOrderPriorityRequest, UpdateOrderStatusRequest};
use crate::domain::{Error, LineItem, NewOrder, Order};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::status::MessageResponse;
use crate::inbound::http::validation::{
    FieldName, order_validation_error, parse_decimal, parse_order_id, parse_score, parse_status,
    require,
};

const ID: FieldName = FieldName::new("id");
const ITEMS: FieldName = FieldName::new("items");
const TOTAL_PRICE: FieldName = FieldName::new("total_price");
const STATUS: FieldName = FieldName::new("status");
const SCORE: FieldName = FieldName::new("score");

/// Request payload for creating an order.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequestBody {
    pub items: Option<Vec<LineItem>>,
    pub total_price: Option<Value>,
}

/// Request payload for changing an order's status.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequestBody {
    pub status: Option<String>,
}

/// Request payload for changing an order's priority.
#[derive(Debug, Deserialize)]
pub struct UpdatePriorityRequestBody {
    pub score: Option<Value>,
}

fn parse_new_order(body: CreateOrderRequestBody) -> Result<NewOrder, Error> {
    let items = require(body.items, ITEMS)?;
    let total_price = parse_decimal(require(body.total_price, TOTAL_PRICE)?, TOTAL_PRICE)?;
    NewOrder::new(items, total_price)
        .map_err(|err| order_validation_error(&err, TOTAL_PRICE, ITEMS))
}

fn parse_status_update(
    id: &str,
    body: UpdateStatusRequestBody,
) -> Result<UpdateOrderStatusRequest, Error> {
    Ok(UpdateOrderStatusRequest {
        id: parse_order_id(id, ID)?,
        status: parse_status(require(body.status, STATUS)?, STATUS)?,
    })
}

fn parse_priority_update(
    id: &str,
    body: UpdatePriorityRequestBody,
) -> Result<UpdateOrderPriorityRequest, Error> {
    Ok(UpdateOrderPriorityRequest {
        id: parse_order_id(id, ID)?,
        score: parse_score(require(body.score, SCORE)?, SCORE)?,
    })
}

/// List pending orders, highest priority first and oldest first within a
/// priority.
#[get("/orders")]
pub async fn list_orders(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Order>>> {
    let orders = state.orders_query.list_active_orders().await?;
    Ok(web::Json(orders))
}

/// Create an order and announce it as `order:new`.
///
/// Responds `201 Created` with the stored order, whose status is always
/// `pending` and priority always 0.
#[post("/orders")]
pub async fn create_order(
    state: web::Data<HttpState>,
    payload: web::Json<CreateOrderRequestBody>,
) -> ApiResult<HttpResponse> {
    let order = parse_new_order(payload.into_inner())?;
    let created = state.orders.create_order(order).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Change an order's status and announce it as `order:updated`.
#[put("/orders/{id}/status")]
pub async fn update_order_status(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateStatusRequestBody>,
) -> ApiResult<web::Json<Order>> {
    let request = parse_status_update(&path.into_inner(), payload.into_inner())?;
    let updated = state.orders.update_status(request).await?;
    Ok(web::Json(updated))
}

/// Change an order's priority and announce it as `order:priority_changed`.
#[put("/orders/{id}/priority")]
pub async fn update_order_priority(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdatePriorityRequestBody>,
) -> ApiResult<web::Json<Order>> {
    let request = parse_priority_update(&path.into_inner(), payload.into_inner())?;
    let updated = state.orders.update_priority(request).await?;
    Ok(web::Json(updated))
}

/// Delete an order and announce it as `order:deleted`.
#[delete("/orders/{id}")]
pub async fn delete_order(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = parse_order_id(&path.into_inner(), ID)?;
    state.orders.delete_order(id).await?;
    Ok(web::Json(MessageResponse::new("Order deleted successfully")))
}

#[cfg(test)]
#[path = "orders_tests.rs"]
mod tests;
