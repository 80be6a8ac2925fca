//! Chat repository implementation.
//!
//! Chats are unique per lost-and-found item (`chats.item_id` carries a
//! unique constraint). Lazy creation inserts with `ON CONFLICT DO NOTHING`
//! and re-selects, so two users opening the same chat concurrently end up
//! on the same row.

use sqlx::PgPool;
use uuid::Uuid;

use society_core::error::{AppError, ErrorKind};
use society_core::result::AppResult;
use society_entity::chat::{Chat, ChatMessage, ChatMessageWithSender};

/// Repository for item chats and their messages.
#[derive(Debug, Clone)]
pub struct ChatRepository {
    pool: PgPool,
}

impl ChatRepository {
    /// Create a new chat repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a chat by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Chat>> {
        sqlx::query_as::<_, Chat>("SELECT * FROM chats WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find chat", e))
    }

    /// Find the chat attached to an item, if one exists.
    pub async fn find_by_item(&self, item_id: Uuid) -> AppResult<Option<Chat>> {
        sqlx::query_as::<_, Chat>("SELECT * FROM chats WHERE item_id = $1")
            .bind(item_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find chat by item", e)
            })
    }

    /// Get the chat for an item, creating it with the given participants
    /// if it does not exist yet. Exactly one chat per item survives
    /// concurrent calls.
    pub async fn find_or_create(&self, item_id: Uuid, participants: &[Uuid]) -> AppResult<Chat> {
        sqlx::query(
            "INSERT INTO chats (item_id, participants) VALUES ($1, $2) \
             ON CONFLICT (item_id) DO NOTHING",
        )
        .bind(item_id)
        .bind(participants)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create chat", e))?;

        self.find_by_item(item_id)
            .await?
            .ok_or_else(|| AppError::internal(format!("Chat for item {item_id} vanished")))
    }

    /// List a user's chats, most recently active first.
    pub async fn find_by_participant(&self, user_id: Uuid) -> AppResult<Vec<Chat>> {
        sqlx::query_as::<_, Chat>(
            "SELECT * FROM chats WHERE $1 = ANY(participants) ORDER BY updated_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list chats", e))
    }

    /// List a chat's messages with sender names, oldest first.
    pub async fn find_messages(&self, chat_id: Uuid) -> AppResult<Vec<ChatMessageWithSender>> {
        sqlx::query_as::<_, ChatMessageWithSender>(
            "SELECT m.id, m.chat_id, m.sender_id, u.name AS sender_name, m.content, m.created_at \
             FROM chat_messages m JOIN users u ON u.id = m.sender_id \
             WHERE m.chat_id = $1 ORDER BY m.created_at ASC",
        )
        .bind(chat_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list messages", e))
    }

    /// Append a message and bump the chat's activity timestamp.
    pub async fn append_message(
        &self,
        chat_id: Uuid,
        sender_id: Uuid,
        content: &str,
    ) -> AppResult<ChatMessage> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let message = sqlx::query_as::<_, ChatMessage>(
            "INSERT INTO chat_messages (chat_id, sender_id, content) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(chat_id)
        .bind(sender_id)
        .bind(content)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to append message", e))?;

        sqlx::query("UPDATE chats SET updated_at = NOW() WHERE id = $1")
            .bind(chat_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to touch chat", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(message)
    }
}
