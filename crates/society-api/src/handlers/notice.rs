//! Notice board handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use society_entity::notice::{Notice, NoticeWithAuthor};

use crate::dto::request::PostNoticeRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::dto::validate;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/notices
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<NoticeWithAuthor>>>, ApiError> {
    let notices = state.notice_service.list(&auth).await?;
    Ok(Json(ApiResponse::ok(notices)))
}

/// GET /api/notices/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Notice>>, ApiError> {
    let notice = state.notice_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok(notice)))
}

/// POST /api/notices
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<PostNoticeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Notice>>), ApiError> {
    validate(&req)?;

    let notice = state
        .notice_service
        .create(
            &auth,
            society_service::notice::PostNoticeRequest {
                title: req.title,
                body: req.body,
                recipient_id: req.recipient_id,
                pinned: req.pinned,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(notice))))
}

/// DELETE /api/notices/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.notice_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Notice deleted".to_string(),
    })))
}
