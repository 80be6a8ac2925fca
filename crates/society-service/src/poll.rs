//! Poll operations: creation, viewing, voting.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use society_auth::policy;
use society_core::error::AppError;
use society_core::result::AppResult;
use society_database::repositories::{NoticeRepository, PollRepository};
use society_entity::poll::{Poll, PollWithOptions};

use crate::context::RequestContext;

/// Data for attaching a poll to a notice.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreatePollRequest {
    pub question: String,
    pub end_date: DateTime<Utc>,
    /// Option texts in display order.
    pub options: Vec<String>,
}

/// Handles polls attached to notices and their votes.
#[derive(Debug, Clone)]
pub struct PollService {
    poll_repo: Arc<PollRepository>,
    notice_repo: Arc<NoticeRepository>,
}

impl PollService {
    /// Creates a new poll service.
    pub fn new(poll_repo: Arc<PollRepository>, notice_repo: Arc<NoticeRepository>) -> Self {
        Self {
            poll_repo,
            notice_repo,
        }
    }

    /// Attaches a poll to a notice. Admin only; one poll per notice.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        notice_id: Uuid,
        req: CreatePollRequest,
    ) -> AppResult<PollWithOptions> {
        policy::require_admin(ctx.role)?;

        if req.question.trim().is_empty() {
            return Err(AppError::validation("Question cannot be empty"));
        }
        if req.options.len() < 2 {
            return Err(AppError::validation("A poll needs at least two options"));
        }
        if req.options.iter().any(|o| o.trim().is_empty()) {
            return Err(AppError::validation("Options cannot be empty"));
        }
        if req.end_date <= ctx.request_time {
            return Err(AppError::validation("End date must be in the future"));
        }

        self.notice_repo
            .find_by_id(notice_id)
            .await?
            .ok_or_else(|| AppError::not_found("Notice not found"))?;

        let (poll, options) = self
            .poll_repo
            .create(notice_id, req.question.trim(), req.end_date, &req.options)
            .await?;

        info!(poll_id = %poll.id, notice_id = %notice_id, "Poll created");
        Ok(PollWithOptions::assemble(poll, options, Vec::new()))
    }

    /// Returns the poll attached to a notice, with options and votes.
    pub async fn get_by_notice(&self, notice_id: Uuid) -> AppResult<PollWithOptions> {
        let poll = self
            .poll_repo
            .find_by_notice(notice_id)
            .await?
            .ok_or_else(|| AppError::not_found("Notice has no poll"))?;

        self.assemble(poll).await
    }

    /// Records a first-time vote. Fails with a conflict if the user has
    /// already voted; their earlier choice stands.
    pub async fn vote(
        &self,
        ctx: &RequestContext,
        poll_id: Uuid,
        option_id: Uuid,
    ) -> AppResult<PollWithOptions> {
        let poll = self.open_poll_with_option(ctx, poll_id, option_id).await?;
        self.poll_repo
            .insert_vote(poll_id, option_id, ctx.user_id)
            .await?;

        info!(poll_id = %poll_id, user_id = %ctx.user_id, "Vote recorded");
        self.assemble(poll).await
    }

    /// Moves the user's vote to another option, or records a first vote
    /// if none exists.
    pub async fn change_vote(
        &self,
        ctx: &RequestContext,
        poll_id: Uuid,
        option_id: Uuid,
    ) -> AppResult<PollWithOptions> {
        let poll = self.open_poll_with_option(ctx, poll_id, option_id).await?;
        self.poll_repo
            .upsert_vote(poll_id, option_id, ctx.user_id)
            .await?;

        info!(poll_id = %poll_id, user_id = %ctx.user_id, "Vote changed");
        self.assemble(poll).await
    }

    /// Loads a poll, checks it is still open, and checks the option
    /// belongs to it.
    async fn open_poll_with_option(
        &self,
        ctx: &RequestContext,
        poll_id: Uuid,
        option_id: Uuid,
    ) -> AppResult<Poll> {
        let poll = self
            .poll_repo
            .find_by_id(poll_id)
            .await?
            .ok_or_else(|| AppError::not_found("Poll not found"))?;

        if !poll.is_open_at(ctx.request_time) {
            return Err(AppError::conflict("Poll has closed"));
        }

        self.poll_repo
            .find_option(poll_id, option_id)
            .await?
            .ok_or_else(|| AppError::validation("Option does not belong to this poll"))?;

        Ok(poll)
    }

    async fn assemble(&self, poll: Poll) -> AppResult<PollWithOptions> {
        let options = self.poll_repo.find_options(poll.id).await?;
        let votes = self.poll_repo.find_votes(poll.id).await?;
        Ok(PollWithOptions::assemble(poll, options, votes))
    }
}
