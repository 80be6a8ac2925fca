//! Chat handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use society_entity::chat::{Chat, ChatMessageWithSender, ChatWithMessages};

use crate::dto::request::SendMessageRequest;
use crate::dto::response::ApiResponse;
use crate::dto::validate;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/lostfound/{id}/chat — opens (and lazily creates) the chat
/// for an item.
pub async fn open(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(item_id): Path<Uuid>,
) -> Result<Json<ApiResponse<ChatWithMessages>>, ApiError> {
    let chat = state.chat_service.open(&auth, item_id).await?;
    Ok(Json(ApiResponse::ok(chat)))
}

/// GET /api/chats
pub async fn list_mine(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Chat>>>, ApiError> {
    let chats = state.chat_service.list_mine(&auth).await?;
    Ok(Json(ApiResponse::ok(chats)))
}

/// GET /api/chats/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ChatWithMessages>>, ApiError> {
    let chat = state.chat_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok(chat)))
}

/// POST /api/chats/{id}/messages
pub async fn send_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ChatMessageWithSender>>), ApiError> {
    validate(&req)?;

    let message = state.chat_service.send_message(&auth, id, &req.content).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(message))))
}
