//! Idempotent provisioning of the default admin account.

use std::sync::Arc;

use tracing::info;

use society_auth::PasswordHasher;
use society_core::result::AppResult;
use society_database::repositories::UserRepository;
use society_entity::user::model::CreateUser;
use society_entity::user::UserRole;

/// Creates the default admin account if no account with the given email
/// exists. Returns whether an account was created.
///
/// Safe to run repeatedly; an existing account (admin or not) is left
/// untouched.
pub async fn ensure_default_admin(
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    name: &str,
    email: &str,
    password: &str,
) -> AppResult<bool> {
    if let Some(existing) = user_repo.find_by_email(email).await? {
        info!(user_id = %existing.id, email = %email, "Admin account already present");
        return Ok(false);
    }

    let password_hash = hasher.hash_password(password)?;
    let user = user_repo
        .create(&CreateUser {
            name: name.to_string(),
            email: email.to_lowercase(),
            password_hash,
            role: UserRole::Admin,
            block: None,
            flat: None,
        })
        .await?;

    info!(user_id = %user.id, email = %email, "Default admin created");
    Ok(true)
}
