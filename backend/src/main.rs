//! Backend entry-point: loads settings, opens the database pool and serves
//! the REST API plus the order event stream.

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use pos_backend::config::AppSettings;
use pos_backend::inbound::http::health::HealthState;
use pos_backend::outbound::notifications::BroadcastHub;
use pos_backend::outbound::persistence::{DbPool, PoolConfig};
use pos_backend::server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os().collect::<Vec<OsString>>())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let database_url = settings
        .database_url()
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let pool_config = PoolConfig::new(database_url)
        .with_max_size(settings.db_max_connections())
        .with_require_ssl(settings.require_ssl());
    let db_pool = DbPool::new(&pool_config)
        .map_err(|e| std::io::Error::other(format!("failed to build database pool: {e}")))?;

    // Startup continues on failure; queries surface the outage as 500s.
    match db_pool.check_connectivity().await {
        Ok(server_time) => info!(%server_time, "database connected"),
        Err(e) => error!(error = %e, "database connectivity check failed"),
    }

    if settings.run_migrations {
        db_pool
            .run_migrations()
            .await
            .map_err(|e| std::io::Error::other(format!("migrations failed: {e}")))?;
        info!("database migrations applied");
    }

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(settings.bind_addr(), db_pool.clone())
        .with_event_hub(BroadcastHub::new(settings.event_channel_capacity()));
    let server = create_server(health_state.clone(), config)?;

    let result = server.await;
    health_state.mark_unhealthy();
    db_pool.close().await;
    info!("database pool closed");
    result
}
