//! Lost-and-found handlers. Item creation takes multipart form data so
//! an image can ride along with the fields.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use uuid::Uuid;

use society_core::error::AppError;
use society_entity::lostfound::{LostFoundItem, LostFoundItemWithUser, LostFoundType};
use society_service::lostfound::PostItemRequest;

use crate::dto::request::LostFoundListQuery;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/lostfound
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<LostFoundListQuery>,
) -> Result<Json<ApiResponse<Vec<LostFoundItemWithUser>>>, ApiError> {
    let items = state.lostfound_service.list(query.item_type).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// GET /api/lostfound/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<LostFoundItem>>, ApiError> {
    let item = state.lostfound_service.get(id).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// POST /api/lostfound (multipart/form-data)
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<LostFoundItem>>), ApiError> {
    let max_image_bytes = state.config.storage.max_upload_size_bytes;

    let mut item_type = None;
    let mut title = None;
    let mut description = None;
    let mut location = None;
    let mut date = None;
    let mut contact = None;
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "type" => item_type = Some(LostFoundType::from_str(&read_text(field).await?)?),
            "title" => title = Some(read_text(field).await?),
            "description" => description = Some(read_text(field).await?),
            "location" => location = Some(read_text(field).await?),
            "date" => {
                let text = read_text(field).await?;
                date = Some(NaiveDate::parse_from_str(&text, "%Y-%m-%d").map_err(|_| {
                    AppError::validation(format!("Invalid date '{text}', expected YYYY-MM-DD"))
                })?);
            }
            "contact" => contact = Some(read_text(field).await?),
            "image" => {
                let content_type = field.content_type().unwrap_or_default();
                if !content_type.starts_with("image/") {
                    return Err(AppError::validation("Uploaded file must be an image").into());
                }
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::validation(format!("Failed to read image: {e}"))
                })?;
                if bytes.len() as u64 > max_image_bytes {
                    return Err(AppError::validation(format!(
                        "Image exceeds the {max_image_bytes} byte limit"
                    ))
                    .into());
                }
                image = Some((file_name, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let item = state
        .lostfound_service
        .create(
            &auth,
            PostItemRequest {
                item_type: item_type
                    .ok_or_else(|| AppError::validation("Field 'type' is required"))?,
                title: title.ok_or_else(|| AppError::validation("Field 'title' is required"))?,
                description,
                location: location
                    .ok_or_else(|| AppError::validation("Field 'location' is required"))?,
                date: date.ok_or_else(|| AppError::validation("Field 'date' is required"))?,
                contact: contact
                    .ok_or_else(|| AppError::validation("Field 'contact' is required"))?,
                image,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(item))))
}

/// PATCH /api/lostfound/{id}/resolve
pub async fn resolve(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<LostFoundItem>>, ApiError> {
    let item = state.lostfound_service.resolve(&auth, id).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// DELETE /api/lostfound/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.lostfound_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Item deleted".to_string(),
    })))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart field: {e}")).into())
}
