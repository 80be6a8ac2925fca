//! Schema migration runner.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use society_core::error::{AppError, ErrorKind};
use society_core::result::AppResult;

/// Schema migrations compiled in from the workspace `migrations/`
/// directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Bring the schema up to date. Safe to run on every startup; versions
/// already applied are skipped.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Schema migration failed", e))?;

    info!(
        known_migrations = MIGRATOR.migrations.len(),
        "Database schema up to date"
    );
    Ok(())
}
