//! Poll handlers — creation, viewing, voting.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use society_entity::poll::PollWithOptions;

use crate::dto::request::{CreatePollRequest, VoteRequest};
use crate::dto::response::ApiResponse;
use crate::dto::validate;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/notices/{id}/poll
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(notice_id): Path<Uuid>,
    Json(req): Json<CreatePollRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PollWithOptions>>), ApiError> {
    validate(&req)?;

    let poll = state
        .poll_service
        .create(
            &auth,
            notice_id,
            society_service::poll::CreatePollRequest {
                question: req.question,
                end_date: req.end_date,
                options: req.options,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(poll))))
}

/// GET /api/notices/{id}/poll
pub async fn get_by_notice(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(notice_id): Path<Uuid>,
) -> Result<Json<ApiResponse<PollWithOptions>>, ApiError> {
    let poll = state.poll_service.get_by_notice(notice_id).await?;
    Ok(Json(ApiResponse::ok(poll)))
}

/// POST /api/polls/{id}/vote
pub async fn vote(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(poll_id): Path<Uuid>,
    Json(req): Json<VoteRequest>,
) -> Result<Json<ApiResponse<PollWithOptions>>, ApiError> {
    let poll = state.poll_service.vote(&auth, poll_id, req.option_id).await?;
    Ok(Json(ApiResponse::ok(poll)))
}

/// PUT /api/polls/{id}/vote
pub async fn change_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(poll_id): Path<Uuid>,
    Json(req): Json<VoteRequest>,
) -> Result<Json<ApiResponse<PollWithOptions>>, ApiError> {
    let poll = state
        .poll_service
        .change_vote(&auth, poll_id, req.option_id)
        .await?;
    Ok(Json(ApiResponse::ok(poll)))
}
