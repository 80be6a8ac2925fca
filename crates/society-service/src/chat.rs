//! Per-item chat operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use society_core::error::AppError;
use society_core::result::AppResult;
use society_database::repositories::{ChatRepository, LostFoundRepository};
use society_entity::chat::{Chat, ChatMessageWithSender, ChatWithMessages};

use crate::context::RequestContext;

/// Handles the two-party chat attached to each lost-and-found item.
#[derive(Debug, Clone)]
pub struct ChatService {
    chat_repo: Arc<ChatRepository>,
    item_repo: Arc<LostFoundRepository>,
}

impl ChatService {
    /// Creates a new chat service.
    pub fn new(chat_repo: Arc<ChatRepository>, item_repo: Arc<LostFoundRepository>) -> Self {
        Self {
            chat_repo,
            item_repo,
        }
    }

    /// Opens the chat for an item, creating it on first contact.
    ///
    /// The first non-owner to open the chat becomes its second
    /// participant, fixed for the chat's lifetime. The item owner can
    /// only open a chat that already exists. Anyone else is turned away
    /// once the pair is fixed.
    pub async fn open(&self, ctx: &RequestContext, item_id: Uuid) -> AppResult<ChatWithMessages> {
        let item = self
            .item_repo
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::not_found("Item not found"))?;

        let chat = if ctx.user_id == item.user_id {
            self.chat_repo
                .find_by_item(item_id)
                .await?
                .ok_or_else(|| AppError::not_found("No one has contacted you about this item yet"))?
        } else {
            let chat = self
                .chat_repo
                .find_or_create(item_id, &[item.user_id, ctx.user_id])
                .await?;
            if !chat.is_participant(ctx.user_id) {
                return Err(AppError::forbidden("Chat is between two other users"));
            }
            chat
        };

        self.with_messages(chat).await
    }

    /// Lists the requester's chats, most recently active first.
    pub async fn list_mine(&self, ctx: &RequestContext) -> AppResult<Vec<Chat>> {
        self.chat_repo.find_by_participant(ctx.user_id).await
    }

    /// Appends a message to a chat. Participants only.
    pub async fn send_message(
        &self,
        ctx: &RequestContext,
        chat_id: Uuid,
        content: &str,
    ) -> AppResult<ChatMessageWithSender> {
        if content.trim().is_empty() {
            return Err(AppError::validation("Message cannot be empty"));
        }

        let chat = self
            .chat_repo
            .find_by_id(chat_id)
            .await?
            .ok_or_else(|| AppError::not_found("Chat not found"))?;

        if !chat.is_participant(ctx.user_id) {
            return Err(AppError::forbidden("Not a participant of this chat"));
        }

        let message = self
            .chat_repo
            .append_message(chat_id, ctx.user_id, content.trim())
            .await?;

        info!(chat_id = %chat_id, sender = %ctx.user_id, "Message sent");
        Ok(ChatMessageWithSender {
            id: message.id,
            chat_id: message.chat_id,
            sender_id: message.sender_id,
            sender_name: ctx.name.clone(),
            content: message.content,
            created_at: message.created_at,
        })
    }

    /// Returns a chat with its full message history. Participants only.
    pub async fn get(&self, ctx: &RequestContext, chat_id: Uuid) -> AppResult<ChatWithMessages> {
        let chat = self
            .chat_repo
            .find_by_id(chat_id)
            .await?
            .ok_or_else(|| AppError::not_found("Chat not found"))?;

        if !chat.is_participant(ctx.user_id) {
            return Err(AppError::forbidden("Not a participant of this chat"));
        }

        self.with_messages(chat).await
    }

    async fn with_messages(&self, chat: Chat) -> AppResult<ChatWithMessages> {
        let messages = self.chat_repo.find_messages(chat.id).await?;
        Ok(ChatWithMessages {
            id: chat.id,
            item_id: chat.item_id,
            participants: chat.participants,
            messages,
            created_at: chat.created_at,
            updated_at: chat.updated_at,
        })
    }
}
