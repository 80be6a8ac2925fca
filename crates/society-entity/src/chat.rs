//! Chat entity models.
//!
//! A chat is keyed uniquely by the lost-and-found item it belongs to and
//! is created lazily on first access. Its participants are fixed at
//! creation time to the item owner plus the first contacting user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A two-party chat attached to a lost-and-found item.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Chat {
    /// Unique chat identifier.
    pub id: Uuid,
    /// The lost-and-found item this chat belongs to (unique per item).
    pub item_id: Uuid,
    /// The two participants: the item owner and the first contacting user.
    pub participants: Vec<Uuid>,
    /// When the chat was created.
    pub created_at: DateTime<Utc>,
    /// When the last message was appended.
    pub updated_at: DateTime<Utc>,
}

impl Chat {
    /// Whether the given user may read/write this chat.
    pub fn is_participant(&self, user_id: Uuid) -> bool {
        self.participants.contains(&user_id)
    }
}

/// One message of a chat; messages are append-only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ChatMessage {
    pub id: Uuid,
    pub chat_id: Uuid,
    pub sender_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Message joined with the sender's name for responses.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ChatMessageWithSender {
    pub id: Uuid,
    pub chat_id: Uuid,
    pub sender_id: Uuid,
    /// Sender's display name.
    pub sender_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Full chat view returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatWithMessages {
    pub id: Uuid,
    pub item_id: Uuid,
    pub participants: Vec<Uuid>,
    pub messages: Vec<ChatMessageWithSender>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
