//! Process configuration loaded via OrthoConfig.
//!
//! Values come from the environment (`DATABASE_URL`, `PORT`, ...) and can be
//! overridden by command-line flags of the same names. The boolean toggles
//! (`DATABASE_SSL`, `RUN_MIGRATIONS`) have no command-line flag, so an absent
//! switch never shadows the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::notifications::DEFAULT_EVENT_CAPACITY;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const PRODUCTION_ENV: &str = "production";

/// Raised when mandatory settings are absent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,
}

/// Settings controlling the HTTP listener, database pool and event fan-out.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
pub struct AppSettings {
    /// PostgreSQL connection string.
    pub database_url: Option<String>,
    /// TCP port for the HTTP listener.
    pub port: Option<u16>,
    /// Interface address for the HTTP listener.
    pub host: Option<IpAddr>,
    /// Deployment environment; `production` enables database SSL.
    pub app_env: Option<String>,
    /// Explicit database SSL override.
    #[ortho_config(skip_cli)]
    pub database_ssl: Option<bool>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Apply embedded migrations at startup.
    #[ortho_config(skip_cli, default = false)]
    pub run_migrations: bool,
    /// Buffered events per WebSocket subscriber.
    pub event_channel_capacity: Option<usize>,
}

impl AppSettings {
    /// Return the database URL or fail when it is not configured.
    pub fn database_url(&self) -> Result<&str, SettingsError> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(SettingsError::MissingDatabaseUrl)
    }

    /// Socket address for the HTTP listener.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Whether database connections must negotiate TLS.
    ///
    /// `DATABASE_SSL` wins when set; otherwise TLS follows `APP_ENV=production`.
    pub fn require_ssl(&self) -> bool {
        self.database_ssl.unwrap_or_else(|| {
            self.app_env
                .as_deref()
                .is_some_and(|env| env.eq_ignore_ascii_case(PRODUCTION_ENV))
        })
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }

    pub fn event_channel_capacity(&self) -> usize {
        self.event_channel_capacity.unwrap_or(DEFAULT_EVENT_CAPACITY)
    }
}
