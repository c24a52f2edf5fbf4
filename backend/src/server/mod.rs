//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;
pub use state_builders::{build_http_state, build_ws_state};

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
use tracing_actix_web::TracingLogger;

use crate::inbound::http::error::json_error_handler;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::orders::{
    create_order, delete_order, list_orders, update_order_priority, update_order_status,
};
use crate::inbound::http::products::list_products;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::status::server_check;
use crate::inbound::ws;
use crate::inbound::ws::state::WsState;
use crate::outbound::persistence::{PostgresOrderRepository, PostgresProductRepository};

/// Shared state handed to every worker's [`App`].
#[derive(Clone)]
pub struct AppDependencies {
    pub health_state: web::Data<HealthState>,
    pub http_state: web::Data<HttpState>,
    pub ws_state: web::Data<WsState>,
}

fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(["GET", "POST", "PUT", "DELETE"])
        .allow_any_header()
}

/// Assemble the application: REST routes under `/api`, the `/ws` event
/// stream and health probes, behind CORS and request tracing.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        ws_state,
    } = deps;

    let api = web::scope("/api")
        .service(server_check)
        .service(list_products)
        .service(list_orders)
        .service(create_order)
        .service(update_order_status)
        .service(update_order_priority)
        .service(delete_order);

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(ws_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(TracingLogger::default())
        .wrap(cors())
        .service(api)
        .service(ws::ws_entry)
        .service(ready)
        .service(live)
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// Readiness is flipped once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        db_pool,
        events,
    } = config;

    let events = Arc::new(events);
    let http_state = web::Data::new(build_http_state(
        Arc::new(PostgresOrderRepository::new(db_pool.clone())),
        Arc::new(PostgresProductRepository::new(db_pool)),
        events.clone(),
    ));
    let ws_state = web::Data::new(build_ws_state(events));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            ws_state: ws_state.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "HTTP server listening");
    health_state.mark_ready();
    Ok(server)
}
