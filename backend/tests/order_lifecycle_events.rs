//! End-to-end tests: REST mutations against a live server fan out to a
//! connected WebSocket subscriber.

mod support;

use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::{HttpServer, web};
use awc::ws::{Codec, Frame};
use awc::{BoxedSocket, Client};
use futures_util::StreamExt;
use pos_backend::inbound::http::health::HealthState;
use pos_backend::outbound::notifications::BroadcastHub;
use pos_backend::server::{AppDependencies, build_app, build_http_state, build_ws_state};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use support::{InMemoryOrderRepository, InMemoryProductRepository};

type Socket = actix_codec::Framed<BoxedSocket, Codec>;

struct TestServer {
    url: String,
    handle: ServerHandle,
}

impl TestServer {
    fn api(&self, path: &str) -> String {
        format!("{}/api{path}", self.url)
    }

    async fn subscribe(&self) -> Socket {
        let (_resp, socket) = Client::default()
            .ws(format!("{}/ws", self.url))
            .connect()
            .await
            .expect("websocket connect");
        socket
    }
}

#[fixture]
fn server() -> TestServer {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    let hub = Arc::new(BroadcastHub::new(16));
    let health_state = web::Data::new(HealthState::new());
    let http_state = web::Data::new(build_http_state(
        Arc::new(InMemoryOrderRepository::default()),
        Arc::new(InMemoryProductRepository::seeded()),
        hub.clone(),
    ));
    let ws_state = web::Data::new(build_ws_state(hub));

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: health_state.clone(),
            http_state: http_state.clone(),
            ws_state: ws_state.clone(),
        })
    })
    .workers(1)
    .listen(listener)
    .expect("bind test server")
    .disable_signals()
    .run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    TestServer {
        url: format!("http://{addr}"),
        handle,
    }
}

async fn next_event(socket: &mut Socket) -> Value {
    loop {
        let frame = socket.next().await.expect("event frame").expect("frame");
        match frame {
            Frame::Text(bytes) => return serde_json::from_slice(&bytes).expect("json"),
            Frame::Ping(_) | Frame::Pong(_) => continue,
            other => panic!("expected text frame, got {other:?}"),
        }
    }
}

async fn create_pizza_fritta(client: &Client, server: &TestServer) -> Value {
    let mut response = client
        .post(server.api("/orders"))
        .send_json(&json!({
            "items": [{ "id": 1, "name": "Pizza Fritta", "price": 6.00 }],
            "total_price": 6.00
        }))
        .await
        .expect("create order");
    assert_eq!(response.status().as_u16(), 201);
    response.json().await.expect("order json")
}

#[rstest]
#[actix_rt::test]
async fn lifecycle_emits_new_updated_deleted_in_order(server: TestServer) {
    let client = Client::default();
    let mut socket = server.subscribe().await;

    let created = create_pizza_fritta(&client, &server).await;
    assert_eq!(created["status"], json!("pending"));
    assert_eq!(created["priority_score"], json!(0));
    let id = created["id"].as_i64().expect("numeric id");

    let response = client
        .put(server.api(&format!("/orders/{id}/status")))
        .send_json(&json!({ "status": "completed" }))
        .await
        .expect("update status");
    assert_eq!(response.status().as_u16(), 200);

    let mut response = client
        .delete(server.api(&format!("/orders/{id}")))
        .send()
        .await
        .expect("delete order");
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("message json");
    assert_eq!(body, json!({ "message": "Order deleted successfully" }));

    let first = next_event(&mut socket).await;
    assert_eq!(first["event"], json!("order:new"));
    assert_eq!(first["data"], created);

    let second = next_event(&mut socket).await;
    assert_eq!(second["event"], json!("order:updated"));
    assert_eq!(second["data"]["status"], json!("completed"));

    let third = next_event(&mut socket).await;
    assert_eq!(third, json!({ "event": "order:deleted", "data": { "id": id } }));

    server.handle.stop(false).await;
}

#[rstest]
#[case::status("PUT", "/orders/999/status", json!({ "status": "completed" }))]
#[case::priority("PUT", "/orders/999/priority", json!({ "score": 5 }))]
#[case::delete("DELETE", "/orders/999", Value::Null)]
#[actix_rt::test]
async fn missing_order_returns_404_without_event(
    server: TestServer,
    #[case] method: &str,
    #[case] path: &str,
    #[case] body: Value,
) {
    let client = Client::default();
    let mut socket = server.subscribe().await;

    let method = awc::http::Method::from_bytes(method.as_bytes()).expect("http method");
    let request = client.request(method, server.api(path));
    let mut response = if body.is_null() {
        request.send().await
    } else {
        request.send_json(&body).await
    }
    .expect("request sent");
    assert_eq!(response.status().as_u16(), 404);
    let error: Value = response.json().await.expect("error json");
    assert_eq!(error["error"], json!("Order not found"));

    // The next frame must be the follow-up creation, not a stray event.
    create_pizza_fritta(&client, &server).await;
    assert_eq!(next_event(&mut socket).await["event"], json!("order:new"));

    server.handle.stop(false).await;
}

#[rstest]
#[actix_rt::test]
async fn active_orders_sort_by_priority_then_age(server: TestServer) {
    let client = Client::default();
    let first = create_pizza_fritta(&client, &server).await;
    let second = create_pizza_fritta(&client, &server).await;
    let third = create_pizza_fritta(&client, &server).await;

    let response = client
        .put(server.api(&format!("/orders/{}/priority", third["id"])))
        .send_json(&json!({ "score": 3 }))
        .await
        .expect("update priority");
    assert_eq!(response.status().as_u16(), 200);

    let response = client
        .put(server.api(&format!("/orders/{}/status", second["id"])))
        .send_json(&json!({ "status": "completed" }))
        .await
        .expect("complete order");
    assert_eq!(response.status().as_u16(), 200);

    let mut response = client
        .get(server.api("/orders"))
        .send()
        .await
        .expect("list orders");
    let listed: Vec<Value> = response.json().await.expect("orders json");
    let ids: Vec<&Value> = listed.iter().map(|order| &order["id"]).collect();
    assert_eq!(ids, vec![&third["id"], &first["id"]]);

    server.handle.stop(false).await;
}

#[rstest]
#[actix_rt::test]
async fn products_are_listed_by_ascending_id(server: TestServer) {
    let mut response = Client::default()
        .get(server.api("/products"))
        .send()
        .await
        .expect("list products");
    assert_eq!(response.status().as_u16(), 200);

    let products: Vec<Value> = response.json().await.expect("products json");
    let ids: Vec<i64> = products
        .iter()
        .filter_map(|product| product["id"].as_i64())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(products[0]["price"], json!("6.00"));

    server.handle.stop(false).await;
}
