//! Facility booking operations.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use society_auth::policy;
use society_core::error::AppError;
use society_core::result::AppResult;
use society_database::repositories::BookingRepository;
use society_entity::booking::{Booking, BookingStatus, BookingWithUser, CreateBooking};

use crate::context::RequestContext;

/// Data for requesting a facility slot.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BookFacilityRequest {
    pub facility: String,
    pub date: NaiveDate,
    pub from_time: Option<String>,
    pub to_time: Option<String>,
}

/// Handles facility bookings and their lifecycle.
#[derive(Debug, Clone)]
pub struct BookingService {
    booking_repo: Arc<BookingRepository>,
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(booking_repo: Arc<BookingRepository>) -> Self {
        Self { booking_repo }
    }

    /// Requests a facility slot. The booking starts in `pending` and is
    /// owned by the requester.
    pub async fn create(&self, ctx: &RequestContext, req: BookFacilityRequest) -> AppResult<Booking> {
        if req.facility.trim().is_empty() {
            return Err(AppError::validation("Facility cannot be empty"));
        }

        let booking = self
            .booking_repo
            .create(&CreateBooking {
                facility: req.facility.trim().to_string(),
                user_id: ctx.user_id,
                date: req.date,
                from_time: req.from_time,
                to_time: req.to_time,
            })
            .await?;

        info!(booking_id = %booking.id, user_id = %ctx.user_id, "Booking requested");
        Ok(booking)
    }

    /// Lists the requester's own bookings.
    pub async fn list_mine(&self, ctx: &RequestContext) -> AppResult<Vec<Booking>> {
        self.booking_repo.find_by_user(ctx.user_id).await
    }

    /// Lists all bookings with owner details, optionally filtered by
    /// status. Admin only.
    pub async fn list_all(
        &self,
        ctx: &RequestContext,
        status: Option<BookingStatus>,
    ) -> AppResult<Vec<BookingWithUser>> {
        policy::require_admin(ctx.role)?;
        self.booking_repo.find_all(status).await
    }

    /// Sets a booking's status directly. Admin only.
    ///
    /// Unlike the cancel path this endpoint accepts any target status
    /// from any source, giving admins a manual override for mistakes.
    pub async fn set_status(
        &self,
        ctx: &RequestContext,
        booking_id: Uuid,
        status: BookingStatus,
    ) -> AppResult<Booking> {
        policy::require_admin(ctx.role)?;

        let booking = self.booking_repo.update_status(booking_id, status).await?;
        info!(booking_id = %booking_id, status = %status, by = %ctx.user_id, "Booking status set");
        Ok(booking)
    }

    /// Removes a booking record entirely. Admin only; cancellation is the
    /// resident-facing path.
    pub async fn delete(&self, ctx: &RequestContext, booking_id: Uuid) -> AppResult<()> {
        policy::require_admin(ctx.role)?;

        if !self.booking_repo.delete(booking_id).await? {
            return Err(AppError::not_found("Booking not found"));
        }

        info!(booking_id = %booking_id, by = %ctx.user_id, "Booking deleted");
        Ok(())
    }

    /// Cancels a booking. Owner or admin; only `pending` and `approved`
    /// bookings can be cancelled.
    pub async fn cancel(&self, ctx: &RequestContext, booking_id: Uuid) -> AppResult<Booking> {
        let booking = self
            .booking_repo
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))?;

        policy::check_owner_or_admin(ctx.user_id, ctx.role, booking.user_id)?;

        // Conditional update so a concurrent status change cannot
        // cancel a booking that already left a cancellable state.
        let cancelled = self
            .booking_repo
            .cancel_if_cancellable(booking_id)
            .await?
            .ok_or_else(|| {
                AppError::conflict(format!(
                    "Booking in status '{}' cannot be cancelled",
                    booking.status
                ))
            })?;

        info!(booking_id = %booking_id, by = %ctx.user_id, "Booking cancelled");
        Ok(cancelled)
    }
}
