//! Notice board operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use society_auth::policy;
use society_core::error::AppError;
use society_core::result::AppResult;
use society_database::repositories::NoticeRepository;
use society_entity::notice::{CreateNotice, Notice, NoticeWithAuthor};

use crate::context::RequestContext;

/// Data for posting a new notice.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PostNoticeRequest {
    pub title: String,
    pub body: Option<String>,
    /// Addressed recipient; `None` broadcasts to all residents.
    pub recipient_id: Option<Uuid>,
    #[serde(default)]
    pub pinned: bool,
}

/// Handles the notice board.
#[derive(Debug, Clone)]
pub struct NoticeService {
    notice_repo: Arc<NoticeRepository>,
}

impl NoticeService {
    /// Creates a new notice service.
    pub fn new(notice_repo: Arc<NoticeRepository>) -> Self {
        Self { notice_repo }
    }

    /// Lists notices for the requester: admins see every notice,
    /// residents see broadcasts plus notices addressed to them.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<NoticeWithAuthor>> {
        if ctx.is_admin() {
            self.notice_repo.find_all().await
        } else {
            self.notice_repo.find_visible_to(ctx.user_id).await
        }
    }

    /// Returns one notice. Residents may only read broadcasts and
    /// notices addressed to them.
    pub async fn get(&self, ctx: &RequestContext, notice_id: Uuid) -> AppResult<Notice> {
        let notice = self
            .notice_repo
            .find_by_id(notice_id)
            .await?
            .ok_or_else(|| AppError::not_found("Notice not found"))?;

        if !ctx.is_admin() {
            if let Some(recipient_id) = notice.recipient_id {
                if recipient_id != ctx.user_id {
                    return Err(AppError::forbidden("Notice is not addressed to you"));
                }
            }
        }

        Ok(notice)
    }

    /// Posts a new notice. Admin only.
    pub async fn create(&self, ctx: &RequestContext, req: PostNoticeRequest) -> AppResult<Notice> {
        policy::require_admin(ctx.role)?;

        if req.title.trim().is_empty() {
            return Err(AppError::validation("Title cannot be empty"));
        }

        let notice = self
            .notice_repo
            .create(&CreateNotice {
                title: req.title.trim().to_string(),
                body: req.body,
                author_id: ctx.user_id,
                recipient_id: req.recipient_id,
                pinned: req.pinned,
            })
            .await?;

        info!(notice_id = %notice.id, author = %ctx.user_id, "Notice posted");
        Ok(notice)
    }

    /// Deletes a notice; the attached poll cascades away with it.
    /// Admin only.
    pub async fn delete(&self, ctx: &RequestContext, notice_id: Uuid) -> AppResult<()> {
        policy::require_admin(ctx.role)?;

        let removed = self.notice_repo.delete(notice_id).await?;
        if !removed {
            return Err(AppError::not_found("Notice not found"));
        }

        info!(notice_id = %notice_id, removed_by = %ctx.user_id, "Notice deleted");
        Ok(())
    }
}
