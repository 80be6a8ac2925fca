//! Resident directory operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use society_auth::policy;
use society_core::error::AppError;
use society_core::result::AppResult;
use society_database::repositories::UserRepository;
use society_entity::user::model::UpdateProfile;
use society_entity::user::{User, UserRole};

use crate::context::RequestContext;

/// Handles the resident directory: listing and profile reads and updates.
#[derive(Debug, Clone)]
pub struct ResidentService {
    user_repo: Arc<UserRepository>,
}

impl ResidentService {
    /// Creates a new resident service.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Lists all resident accounts. The directory is visible to any
    /// authenticated user; credentials never leave the response layer.
    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.user_repo.find_by_role(UserRole::Resident).await
    }

    /// Returns one resident's profile. Any authenticated user may look
    /// up a directory entry.
    pub async fn get(&self, user_id: Uuid) -> AppResult<User> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Resident not found"))
    }

    /// Updates a resident's profile fields. Self or admin.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        update: UpdateProfile,
    ) -> AppResult<User> {
        policy::check_owner_or_admin(ctx.user_id, ctx.role, user_id)?;

        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Name cannot be empty"));
            }
        }

        let user = self.user_repo.update_profile(user_id, &update).await?;
        info!(user_id = %user_id, "Profile updated");
        Ok(user)
    }
}
