//! Connection pooling for the society database.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use society_core::config::DatabaseConfig;
use society_core::error::{AppError, ErrorKind};
use society_core::result::AppResult;

/// Shared handle to the PostgreSQL pool.
///
/// Cloning is cheap; every repository holds a clone of the inner pool.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Open a pool sized by the given settings and verify it with one
    /// initial connection.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .max_lifetime(Duration::from_secs(config.max_lifetime_seconds))
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Cannot reach PostgreSQL at {}", config.masked_url()),
                    e,
                )
            })?;

        info!(
            url = %config.masked_url(),
            max_connections = config.max_connections,
            "Database pool ready"
        );
        Ok(Self { pool })
    }

    /// Borrow the inner sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Take the inner sqlx pool, consuming the handle.
    pub fn into_pool(self) -> PgPool {
        self.pool
    }

    /// Round-trip a trivial query to confirm the database is answering.
    pub async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }

    /// Drain and close every connection.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}
