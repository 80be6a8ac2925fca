//! Notice repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use society_core::error::{AppError, ErrorKind};
use society_core::result::AppResult;
use society_entity::notice::{CreateNotice, Notice, NoticeWithAuthor};

/// Repository for notice board operations.
#[derive(Debug, Clone)]
pub struct NoticeRepository {
    pool: PgPool,
}

impl NoticeRepository {
    /// Create a new notice repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a notice by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Notice>> {
        sqlx::query_as::<_, Notice>("SELECT * FROM notices WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find notice", e))
    }

    /// List notices visible to a user: broadcasts plus notices addressed
    /// to them. Pinned notices first, then newest first.
    pub async fn find_visible_to(&self, user_id: Uuid) -> AppResult<Vec<NoticeWithAuthor>> {
        sqlx::query_as::<_, NoticeWithAuthor>(
            "SELECT n.id, n.title, n.body, n.author_id, u.name AS author_name, \
                    u.email AS author_email, n.recipient_id, n.pinned, n.has_poll, n.created_at \
             FROM notices n LEFT JOIN users u ON u.id = n.author_id \
             WHERE n.recipient_id IS NULL OR n.recipient_id = $1 \
             ORDER BY n.pinned DESC, n.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notices", e))
    }

    /// List every notice, for the admin board. Pinned first, then newest.
    pub async fn find_all(&self) -> AppResult<Vec<NoticeWithAuthor>> {
        sqlx::query_as::<_, NoticeWithAuthor>(
            "SELECT n.id, n.title, n.body, n.author_id, u.name AS author_name, \
                    u.email AS author_email, n.recipient_id, n.pinned, n.has_poll, n.created_at \
             FROM notices n LEFT JOIN users u ON u.id = n.author_id \
             ORDER BY n.pinned DESC, n.created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notices", e))
    }

    /// Post a new notice.
    pub async fn create(&self, data: &CreateNotice) -> AppResult<Notice> {
        sqlx::query_as::<_, Notice>(
            "INSERT INTO notices (title, body, author_id, recipient_id, pinned) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.body)
        .bind(data.author_id)
        .bind(data.recipient_id)
        .bind(data.pinned)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create notice", e))
    }

    /// Mark a notice as carrying a poll.
    pub async fn set_has_poll(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("UPDATE notices SET has_poll = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to flag notice", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Notice {id} not found")));
        }
        Ok(())
    }

    /// Delete a notice. The attached poll, if any, cascades.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM notices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete notice", e))?;

        Ok(result.rows_affected() > 0)
    }
}
