//! Registration, login, and current-user lookup.

use std::sync::Arc;

use tracing::info;

use society_auth::{JwtEncoder, PasswordHasher};
use society_core::error::AppError;
use society_core::result::AppResult;
use society_database::repositories::UserRepository;
use society_entity::user::model::CreateUser;
use society_entity::user::{User, UserRole};

use crate::context::RequestContext;

/// Data for registering a new resident account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub block: Option<String>,
    pub flat: Option<String>,
}

/// A successful authentication: the user plus their access token.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AuthResult {
    pub user: User,
    pub token: String,
}

/// Handles account registration and credential-based login.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token encoder.
    encoder: Arc<JwtEncoder>,
    /// Minimum accepted password length.
    password_min_length: usize,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        password_min_length: usize,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            encoder,
            password_min_length,
        }
    }

    /// Registers a new resident account and issues a token.
    ///
    /// Self-registration always produces the `resident` role; admin
    /// accounts are provisioned out of band.
    pub async fn register(&self, req: RegisterRequest) -> AppResult<AuthResult> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Name cannot be empty"));
        }
        if !req.email.contains('@') || !req.email.contains('.') {
            return Err(AppError::validation("Invalid email format"));
        }
        if req.password.len() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.password_min_length
            )));
        }

        if self.user_repo.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                name: req.name.trim().to_string(),
                email: req.email.to_lowercase(),
                password_hash,
                role: UserRole::Resident,
                block: req.block,
                flat: req.flat,
            })
            .await?;

        let token = self.encoder.generate_token(user.id, user.role, &user.name)?;
        info!(user_id = %user.id, "Resident registered");

        Ok(AuthResult { user, token })
    }

    /// Authenticates by email and password and issues a token.
    ///
    /// Unknown email and wrong password produce the same error, so the
    /// response does not reveal which accounts exist.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthResult> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid email or password"))?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::authentication("Invalid email or password"));
        }

        let token = self.encoder.generate_token(user.id, user.role, &user.name)?;
        info!(user_id = %user.id, "User logged in");

        Ok(AuthResult { user, token })
    }

    /// Returns the authenticated user's full record.
    pub async fn current_user(&self, ctx: &RequestContext) -> AppResult<User> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
