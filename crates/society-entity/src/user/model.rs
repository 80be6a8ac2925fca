//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A registered resident or admin of the society.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Unique email address used for login.
    pub email: String,
    /// Argon2 password hash. Never serialized in responses.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// User role.
    pub role: UserRole,
    /// Residential block (e.g. "A").
    pub block: Option<String>,
    /// Flat number within the block.
    pub flat: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
    /// Residential block.
    pub block: Option<String>,
    /// Flat number.
    pub flat: Option<String>,
}

/// Mutable profile fields. Identity (id, email uniqueness) and credentials
/// are updated through dedicated paths only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// New full name.
    pub name: Option<String>,
    /// New block.
    pub block: Option<String>,
    /// New flat number.
    pub flat: Option<String>,
}
