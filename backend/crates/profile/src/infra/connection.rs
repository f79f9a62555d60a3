//! Database Connection
//!
//! Owns the pool. Connecting returns a typed error; the caller decides
//! whether that ends the process.

use std::env;
use std::time::Duration;

use kernel::error::app_error::AppResult;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("DATABASE_URL is not set")]
    MissingUrl,

    #[error("Invalid database URL: {0}")]
    InvalidUrl(#[source] sqlx::Error),

    #[error("Database unreachable: {0}")]
    Unreachable(#[source] sqlx::Error),
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(10),
        }
    }

    /// `DATABASE_URL` (required), `DATABASE_MAX_CONNECTIONS` (default 5)
    pub fn from_env() -> Result<Self, ConnectError> {
        let url = env::var("DATABASE_URL").map_err(|_| ConnectError::MissingUrl)?;
        let mut config = Self::new(url);
        if let Some(max) = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.max_connections = max;
        }
        Ok(config)
    }
}

/// Connected database handle; cheap to clone.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, ConnectError> {
        let options: PgConnectOptions = config.url.parse().map_err(ConnectError::InvalidUrl)?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_with(options)
            .await
            .map_err(ConnectError::Unreachable)?;

        tracing::info!(max_connections = config.max_connections, "Connected to database");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round trip for health checks
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}
