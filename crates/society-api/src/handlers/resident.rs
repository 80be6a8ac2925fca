//! Resident directory handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use society_entity::user::model::UpdateProfile;

use crate::dto::request::UpdateProfileRequest;
use crate::dto::response::{ApiResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/residents
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, ApiError> {
    let residents = state.resident_service.list().await?;
    Ok(Json(ApiResponse::ok(
        residents.into_iter().map(UserResponse::from).collect(),
    )))
}

/// GET /api/residents/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.resident_service.get(id).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/residents/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .resident_service
        .update_profile(
            &auth,
            id,
            UpdateProfile {
                name: req.name,
                block: req.block,
                flat: req.flat,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(user.into())))
}
