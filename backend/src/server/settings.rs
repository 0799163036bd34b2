//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `LUCKYGENOME_*` environment variables and an
//! optional configuration file, in that order of precedence.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use luckygenome::outbound::persistence::PoolConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_DB_MIN_IDLE: u32 = 2;
const DEFAULT_DB_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Runtime settings for the HTTP server and its genome store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LUCKYGENOME")]
pub struct ServerSettings {
    /// Socket address the listener binds to.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. The fixture store is used when absent.
    pub database_url: Option<String>,
    /// Upper bound on pooled connections.
    pub db_max_connections: Option<u32>,
    /// Idle connections kept open.
    pub db_min_idle: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub db_connect_timeout_secs: Option<u64>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
}

impl ServerSettings {
    /// Parse the configured bind address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// Returns [`std::io::ErrorKind::InvalidInput`] when the address does not
    /// parse.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address {raw:?}: {err}"),
            )
        })
    }

    /// Return the database URL, treating blank values as unset.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Build pool settings for `database_url` from the configured limits.
    pub fn pool_config(&self, database_url: &str) -> PoolConfig {
        PoolConfig::new(database_url)
            .with_max_size(self.db_max_connections.unwrap_or(DEFAULT_DB_MAX_CONNECTIONS))
            .with_min_idle(Some(self.db_min_idle.unwrap_or(DEFAULT_DB_MIN_IDLE)))
            .with_connection_timeout(Duration::from_secs(
                self.db_connect_timeout_secs
                    .unwrap_or(DEFAULT_DB_CONNECT_TIMEOUT_SECS),
            ))
    }
}
