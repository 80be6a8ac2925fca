//! Facility booking handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use society_entity::booking::{Booking, BookingWithUser};

use crate::dto::request::{BookFacilityRequest, BookingListQuery, BookingStatusRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::dto::validate;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/bookings
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<BookFacilityRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Booking>>), ApiError> {
    validate(&req)?;

    let booking = state
        .booking_service
        .create(
            &auth,
            society_service::booking::BookFacilityRequest {
                facility: req.facility,
                date: req.date,
                from_time: req.from_time,
                to_time: req.to_time,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(booking))))
}

/// GET /api/bookings
pub async fn list_mine(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Booking>>>, ApiError> {
    let bookings = state.booking_service.list_mine(&auth).await?;
    Ok(Json(ApiResponse::ok(bookings)))
}

/// GET /api/bookings/all
pub async fn list_all(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<BookingListQuery>,
) -> Result<Json<ApiResponse<Vec<BookingWithUser>>>, ApiError> {
    let bookings = state.booking_service.list_all(&auth, query.status).await?;
    Ok(Json(ApiResponse::ok(bookings)))
}

/// PATCH /api/bookings/{id}/status
pub async fn set_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<BookingStatusRequest>,
) -> Result<Json<ApiResponse<Booking>>, ApiError> {
    let booking = state.booking_service.set_status(&auth, id, req.status).await?;
    Ok(Json(ApiResponse::ok(booking)))
}

/// DELETE /api/bookings/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.booking_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Booking deleted".to_string(),
    })))
}

/// POST /api/bookings/{id}/cancel
pub async fn cancel(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Booking>>, ApiError> {
    let booking = state.booking_service.cancel(&auth, id).await?;
    Ok(Json(ApiResponse::ok(booking)))
}
