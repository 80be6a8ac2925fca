//! Lost-and-found repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use society_core::error::{AppError, ErrorKind};
use society_core::result::AppResult;
use society_entity::lostfound::{
    CreateLostFoundItem, LostFoundItem, LostFoundItemWithUser, LostFoundStatus, LostFoundType,
};

const WITH_USER_SELECT: &str =
    "SELECT i.id, i.item_type, i.title, i.description, i.location, i.date, i.image_path, \
            i.status, i.user_id, u.name AS user_name, u.email AS user_email, i.contact, \
            i.created_at \
     FROM lostfound_items i JOIN users u ON u.id = i.user_id";

/// Repository for lost-and-found item postings.
#[derive(Debug, Clone)]
pub struct LostFoundRepository {
    pool: PgPool,
}

impl LostFoundRepository {
    /// Create a new lost-and-found repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an item by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<LostFoundItem>> {
        sqlx::query_as::<_, LostFoundItem>("SELECT * FROM lostfound_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find item", e))
    }

    /// List items with poster details, optionally filtered by type,
    /// newest first.
    pub async fn find_all(
        &self,
        item_type: Option<LostFoundType>,
    ) -> AppResult<Vec<LostFoundItemWithUser>> {
        match item_type {
            Some(item_type) => sqlx::query_as::<_, LostFoundItemWithUser>(&format!(
                "{WITH_USER_SELECT} WHERE i.item_type = $1 ORDER BY i.created_at DESC"
            ))
            .bind(item_type)
            .fetch_all(&self.pool)
            .await,
            None => {
                sqlx::query_as::<_, LostFoundItemWithUser>(&format!(
                    "{WITH_USER_SELECT} ORDER BY i.created_at DESC"
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list items", e))
    }

    /// Create a new item posting in `open` status.
    pub async fn create(&self, data: &CreateLostFoundItem) -> AppResult<LostFoundItem> {
        sqlx::query_as::<_, LostFoundItem>(
            "INSERT INTO lostfound_items \
                (item_type, title, description, location, date, image_path, user_id, contact) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(data.item_type)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.location)
        .bind(data.date)
        .bind(&data.image_path)
        .bind(data.user_id)
        .bind(&data.contact)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create item", e))
    }

    /// Set an item's status.
    pub async fn update_status(&self, id: Uuid, status: LostFoundStatus) -> AppResult<LostFoundItem> {
        sqlx::query_as::<_, LostFoundItem>(
            "UPDATE lostfound_items SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update item status", e))?
        .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))
    }

    /// Delete an item. Its chat and messages cascade.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM lostfound_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete item", e))?;

        Ok(result.rows_affected() > 0)
    }
}
