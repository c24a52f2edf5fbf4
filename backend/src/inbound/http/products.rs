//! Product catalogue HTTP handlers.
//!
//! ```text
//! GET /api/products
//! ```

use actix_web::{get, web};

use crate::domain::Product;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// List every product ordered by id.
///
/// On failure the 500 body also carries `internalError` with the database
/// failure text.
#[get("/products")]
pub async fn list_products(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Product>>> {
    let products = state.products.list_products().await?;
    Ok(web::Json(products))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rust_decimal_macros::dec;
    use serde_json::Value;

    use super::*;
    use crate::domain::Error;
    use crate::domain::ports::{MockOrderCommand, MockOrderQuery, MockProductQuery};
    use crate::inbound::http::state::HttpStatePorts;

    fn state_with(products: MockProductQuery) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(HttpStatePorts {
            orders: Arc::new(MockOrderCommand::new()),
            orders_query: Arc::new(MockOrderQuery::new()),
            products: Arc::new(products),
        }))
    }

    #[actix_web::test]
    async fn lists_products_with_string_prices() {
        let mut products = MockProductQuery::new();
        products.expect_list_products().times(1).return_once(|| {
            Ok(vec![
                Product {
                    id: 1,
                    name: "Pizza Fritta".to_owned(),
                    price: dec!(6.00),
                    color: "#FF6B6B".to_owned(),
                    image_url: None,
                },
                Product {
                    id: 2,
                    name: "Montanara".to_owned(),
                    price: dec!(5.50),
                    color: "#333333".to_owned(),
                    image_url: Some("montanara".to_owned()),
                },
            ])
        });

        let app = actix_test::init_service(
            App::new()
                .app_data(state_with(products))
                .service(web::scope("/api").service(list_products)),
        )
        .await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/products").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        let ids: Vec<i64> = body
            .as_array()
            .expect("array body")
            .iter()
            .filter_map(|product| product.get("id").and_then(Value::as_i64))
            .collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(
            body.get(1).and_then(|product| product.get("price")),
            Some(&Value::from("5.50"))
        );
    }

    #[actix_web::test]
    async fn failures_expose_internal_error() {
        let mut products = MockProductQuery::new();
        products.expect_list_products().times(1).return_once(|| {
            Err(Error::internal("Failed to fetch products").with_cause("connection refused"))
        });

        let app = actix_test::init_service(
            App::new()
                .app_data(state_with(products))
                .service(web::scope("/api").service(list_products)),
        )
        .await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/products").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("error").and_then(Value::as_str),
            Some("Failed to fetch products")
        );
        assert_eq!(
            body.get("internalError").and_then(Value::as_str),
            Some("connection refused")
        );
    }
}
