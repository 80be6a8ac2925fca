//! Poll repository implementation.
//!
//! The one-vote-per-user invariant lives in the `poll_votes` primary key
//! `(poll_id, user_id)`. First votes and vote changes are single upsert
//! statements, so concurrent attempts cannot produce duplicate rows.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use society_core::error::{AppError, ErrorKind};
use society_core::result::AppResult;
use society_entity::poll::{Poll, PollOption, PollVote};

/// Repository for polls, their options, and votes.
#[derive(Debug, Clone)]
pub struct PollRepository {
    pool: PgPool,
}

impl PollRepository {
    /// Create a new poll repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a poll by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Poll>> {
        sqlx::query_as::<_, Poll>("SELECT * FROM polls WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find poll", e))
    }

    /// Find the poll attached to a notice, if any.
    pub async fn find_by_notice(&self, notice_id: Uuid) -> AppResult<Option<Poll>> {
        sqlx::query_as::<_, Poll>("SELECT * FROM polls WHERE notice_id = $1")
            .bind(notice_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find poll by notice", e)
            })
    }

    /// Create a poll with its options and flag the owning notice, all in
    /// one transaction.
    pub async fn create(
        &self,
        notice_id: Uuid,
        question: &str,
        end_date: DateTime<Utc>,
        options: &[String],
    ) -> AppResult<(Poll, Vec<PollOption>)> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let poll = sqlx::query_as::<_, Poll>(
            "INSERT INTO polls (notice_id, question, end_date) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(notice_id)
        .bind(question)
        .bind(end_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("polls_notice_id_key") =>
            {
                AppError::conflict("Notice already has a poll")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create poll", e),
        })?;

        let mut created = Vec::with_capacity(options.len());
        for (position, text) in options.iter().enumerate() {
            let option = sqlx::query_as::<_, PollOption>(
                "INSERT INTO poll_options (poll_id, text, position) \
                 VALUES ($1, $2, $3) RETURNING *",
            )
            .bind(poll.id)
            .bind(text)
            .bind(position as i32)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to create poll option", e)
            })?;
            created.push(option);
        }

        sqlx::query("UPDATE notices SET has_poll = TRUE WHERE id = $1")
            .bind(notice_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to flag notice", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok((poll, created))
    }

    /// List a poll's options in display order.
    pub async fn find_options(&self, poll_id: Uuid) -> AppResult<Vec<PollOption>> {
        sqlx::query_as::<_, PollOption>(
            "SELECT * FROM poll_options WHERE poll_id = $1 ORDER BY position ASC",
        )
        .bind(poll_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list poll options", e))
    }

    /// Find one option of a poll.
    pub async fn find_option(&self, poll_id: Uuid, option_id: Uuid) -> AppResult<Option<PollOption>> {
        sqlx::query_as::<_, PollOption>(
            "SELECT * FROM poll_options WHERE poll_id = $1 AND id = $2",
        )
        .bind(poll_id)
        .bind(option_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find poll option", e))
    }

    /// List all votes of a poll.
    pub async fn find_votes(&self, poll_id: Uuid) -> AppResult<Vec<PollVote>> {
        sqlx::query_as::<_, PollVote>("SELECT * FROM poll_votes WHERE poll_id = $1")
            .bind(poll_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list votes", e))
    }

    /// Record a first-time vote. Fails with `Conflict` if the user has
    /// already voted in this poll; their earlier choice stands.
    pub async fn insert_vote(&self, poll_id: Uuid, option_id: Uuid, user_id: Uuid) -> AppResult<()> {
        let result = sqlx::query(
            "INSERT INTO poll_votes (poll_id, option_id, user_id) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (poll_id, user_id) DO NOTHING",
        )
        .bind(poll_id)
        .bind(option_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record vote", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::conflict("User has already voted in this poll"));
        }
        Ok(())
    }

    /// Record or replace a vote: moves an existing vote to the new option,
    /// or records a first vote if none exists.
    pub async fn upsert_vote(&self, poll_id: Uuid, option_id: Uuid, user_id: Uuid) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO poll_votes (poll_id, option_id, user_id) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (poll_id, user_id) DO UPDATE SET option_id = EXCLUDED.option_id",
        )
        .bind(poll_id)
        .bind(option_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to change vote", e))?;
        Ok(())
    }
}
