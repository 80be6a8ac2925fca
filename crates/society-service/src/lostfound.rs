//! Lost-and-found board operations.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use society_auth::policy;
use society_core::error::AppError;
use society_core::result::AppResult;
use society_database::repositories::LostFoundRepository;
use society_entity::lostfound::{
    CreateLostFoundItem, LostFoundItem, LostFoundItemWithUser, LostFoundStatus, LostFoundType,
};
use society_storage::ImageStore;

use crate::context::RequestContext;

/// Data for posting a lost or found item. The optional image arrives as
/// raw bytes from the multipart handler.
#[derive(Debug, Clone)]
pub struct PostItemRequest {
    pub item_type: LostFoundType,
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub date: NaiveDate,
    pub contact: String,
    /// Uploaded image as `(original file name, bytes)`.
    pub image: Option<(String, Vec<u8>)>,
}

/// Handles lost-and-found item postings and their images.
#[derive(Debug, Clone)]
pub struct LostFoundService {
    item_repo: Arc<LostFoundRepository>,
    images: Arc<ImageStore>,
}

impl LostFoundService {
    /// Creates a new lost-and-found service.
    pub fn new(item_repo: Arc<LostFoundRepository>, images: Arc<ImageStore>) -> Self {
        Self { item_repo, images }
    }

    /// Lists item postings, optionally filtered by lost/found.
    pub async fn list(
        &self,
        item_type: Option<LostFoundType>,
    ) -> AppResult<Vec<LostFoundItemWithUser>> {
        self.item_repo.find_all(item_type).await
    }

    /// Returns one item posting.
    pub async fn get(&self, item_id: Uuid) -> AppResult<LostFoundItem> {
        self.item_repo
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::not_found("Item not found"))
    }

    /// Posts a new item, storing its image first if one was uploaded.
    pub async fn create(&self, ctx: &RequestContext, req: PostItemRequest) -> AppResult<LostFoundItem> {
        if req.title.trim().is_empty() {
            return Err(AppError::validation("Title cannot be empty"));
        }
        if req.location.trim().is_empty() {
            return Err(AppError::validation("Location cannot be empty"));
        }
        if req.contact.trim().is_empty() {
            return Err(AppError::validation("Contact cannot be empty"));
        }

        let image_path = match req.image {
            Some((name, bytes)) => Some(self.images.save_image(&name, &bytes).await?),
            None => None,
        };

        let item = self
            .item_repo
            .create(&CreateLostFoundItem {
                item_type: req.item_type,
                title: req.title.trim().to_string(),
                description: req.description,
                location: req.location,
                date: req.date,
                image_path,
                user_id: ctx.user_id,
                contact: req.contact,
            })
            .await?;

        info!(item_id = %item.id, user_id = %ctx.user_id, "Item posted");
        Ok(item)
    }

    /// Marks an item resolved. Owner or admin; only `open` items can be
    /// resolved, and there is no way back.
    pub async fn resolve(&self, ctx: &RequestContext, item_id: Uuid) -> AppResult<LostFoundItem> {
        let item = self.get(item_id).await?;
        policy::check_owner_or_admin(ctx.user_id, ctx.role, item.user_id)?;

        if !item.status.can_transition_to(LostFoundStatus::Resolved) {
            return Err(AppError::conflict(format!(
                "Item in status '{}' cannot be resolved",
                item.status
            )));
        }

        let item = self
            .item_repo
            .update_status(item_id, LostFoundStatus::Resolved)
            .await?;

        info!(item_id = %item_id, by = %ctx.user_id, "Item resolved");
        Ok(item)
    }

    /// Deletes an item posting, its chat, and its stored image. Admin
    /// only; owners close their own postings through `resolve`. A failed
    /// image removal is logged and does not block the record deletion.
    pub async fn delete(&self, ctx: &RequestContext, item_id: Uuid) -> AppResult<()> {
        policy::require_admin(ctx.role)?;
        let item = self.get(item_id).await?;

        if let Some(image_path) = &item.image_path {
            if let Err(e) = self.images.delete_image(image_path).await {
                warn!(item_id = %item_id, error = %e, "Failed to delete item image");
            }
        }

        let removed = self.item_repo.delete(item_id).await?;
        if !removed {
            return Err(AppError::not_found("Item not found"));
        }

        info!(item_id = %item_id, by = %ctx.user_id, "Item deleted");
        Ok(())
    }
}
