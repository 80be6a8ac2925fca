//! Maintenance/complaint request handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use society_database::repositories::maintenance::RequestFilter;
use society_entity::maintenance::{MaintenanceRequest, MaintenanceRequestWithNames};

use crate::dto::request::{FileRequestBody, MaintenanceListQuery, MaintenanceStatusRequest};
use crate::dto::response::ApiResponse;
use crate::dto::validate;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/maintenance
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<FileRequestBody>,
) -> Result<(StatusCode, Json<ApiResponse<MaintenanceRequest>>), ApiError> {
    validate(&req)?;

    let request = state
        .maintenance_service
        .create(
            &auth,
            society_service::maintenance::FileRequestRequest {
                title: req.title,
                description: req.description,
                request_type: req.request_type,
                category: req.category,
                priority: req.priority,
                location: req.location,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(request))))
}

/// GET /api/maintenance
pub async fn list_mine(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<MaintenanceRequest>>>, ApiError> {
    let requests = state.maintenance_service.list_mine(&auth).await?;
    Ok(Json(ApiResponse::ok(requests)))
}

/// GET /api/maintenance/all
pub async fn list_all(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<MaintenanceListQuery>,
) -> Result<Json<ApiResponse<Vec<MaintenanceRequestWithNames>>>, ApiError> {
    // Date filters arrive as calendar days; the end bound is inclusive,
    // so it becomes an exclusive bound at the next midnight.
    let filter = RequestFilter {
        request_type: query.request_type,
        category: query.category,
        status: query.status,
        start_date: query
            .start_date
            .map(|d| d.and_time(chrono::NaiveTime::MIN).and_utc()),
        end_date: query
            .end_date
            .and_then(|d| d.checked_add_days(chrono::Days::new(1)))
            .map(|d| d.and_time(chrono::NaiveTime::MIN).and_utc()),
    };
    let requests = state.maintenance_service.list_all(&auth, filter).await?;
    Ok(Json(ApiResponse::ok(requests)))
}

/// GET /api/maintenance/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MaintenanceRequest>>, ApiError> {
    let request = state.maintenance_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok(request)))
}

/// PATCH /api/maintenance/{id}/status
pub async fn set_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<MaintenanceStatusRequest>,
) -> Result<Json<ApiResponse<MaintenanceRequest>>, ApiError> {
    let request = state
        .maintenance_service
        .set_status(
            &auth,
            id,
            society_service::maintenance::UpdateStatusRequest {
                status: req.status,
                assigned_to: req.assigned_to,
                admin_comments: req.admin_comments,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(request)))
}

/// POST /api/maintenance/{id}/cancel
pub async fn cancel(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MaintenanceRequest>>, ApiError> {
    let request = state.maintenance_service.cancel(&auth, id).await?;
    Ok(Json(ApiResponse::ok(request)))
}
