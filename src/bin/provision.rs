//! Provisioning tool — creates the default admin account.
//!
//! Runs the migrations and then ensures the admin identified by
//! `SOCIETY_ADMIN_EMAIL` exists, creating it with `SOCIETY_ADMIN_NAME`
//! and `SOCIETY_ADMIN_PASSWORD` if not. Safe to run repeatedly;
//! decoupled from server startup so a compromised password cannot be
//! reset by a restart.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use society_auth::PasswordHasher;
use society_core::config::AppConfig;
use society_core::error::AppError;
use society_database::DatabasePool;
use society_database::repositories::UserRepository;
use society_service::provision::ensure_default_admin;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!("Provisioning failed: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let env = std::env::var("SOCIETY_ENV").unwrap_or_else(|_| "development".to_string());
    let config = AppConfig::load(&env)?;

    let name = env_or("SOCIETY_ADMIN_NAME", "Society Admin");
    let email = std::env::var("SOCIETY_ADMIN_EMAIL")
        .map_err(|_| AppError::configuration("SOCIETY_ADMIN_EMAIL is required"))?;
    let password = std::env::var("SOCIETY_ADMIN_PASSWORD")
        .map_err(|_| AppError::configuration("SOCIETY_ADMIN_PASSWORD is required"))?;

    if password.len() < config.auth.password_min_length {
        return Err(AppError::validation(format!(
            "Admin password must be at least {} characters",
            config.auth.password_min_length
        )));
    }

    let db = DatabasePool::connect(&config.database).await?;
    society_database::migration::run_migrations(db.pool()).await?;

    let user_repo = Arc::new(UserRepository::new(db.into_pool()));
    let hasher = Arc::new(PasswordHasher::new());

    let created = ensure_default_admin(user_repo, hasher, &name, &email, &password).await?;
    if created {
        tracing::info!("Admin account '{email}' created");
    } else {
        tracing::info!("Admin account '{email}' already exists, nothing to do");
    }

    Ok(())
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
