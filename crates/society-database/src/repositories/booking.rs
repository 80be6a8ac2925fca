//! Facility booking repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use society_core::error::{AppError, ErrorKind};
use society_core::result::AppResult;
use society_entity::booking::{Booking, BookingStatus, BookingWithUser, CreateBooking};

const WITH_USER_SELECT: &str =
    "SELECT b.id, b.facility, b.user_id, u.name AS user_name, u.email AS user_email, \
            b.date, b.from_time, b.to_time, b.status, b.created_at \
     FROM bookings b JOIN users u ON u.id = b.user_id";

/// Repository for facility booking operations.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a booking by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find booking", e))
    }

    /// List one user's bookings, newest first.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bookings", e))
    }

    /// List all bookings with owner details, optionally filtered by
    /// status, newest first.
    pub async fn find_all(&self, status: Option<BookingStatus>) -> AppResult<Vec<BookingWithUser>> {
        match status {
            Some(status) => sqlx::query_as::<_, BookingWithUser>(&format!(
                "{WITH_USER_SELECT} WHERE b.status = $1 ORDER BY b.created_at DESC"
            ))
            .bind(status)
            .fetch_all(&self.pool)
            .await,
            None => {
                sqlx::query_as::<_, BookingWithUser>(&format!(
                    "{WITH_USER_SELECT} ORDER BY b.created_at DESC"
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bookings", e))
    }

    /// Create a booking in `pending` status.
    pub async fn create(&self, data: &CreateBooking) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (facility, user_id, date, from_time, to_time) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.facility)
        .bind(data.user_id)
        .bind(data.date)
        .bind(&data.from_time)
        .bind(&data.to_time)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create booking", e))
    }

    /// Set a booking's status unconditionally. Transition checks are the
    /// caller's responsibility.
    pub async fn update_status(&self, id: Uuid, status: BookingStatus) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update booking status", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))
    }

    /// Delete a booking. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete booking", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Set a booking to `cancelled` only if it is still in a cancellable
    /// status. Returns the updated row, or `None` when the status check
    /// lost the race.
    pub async fn cancel_if_cancellable(&self, id: Uuid) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = 'cancelled' \
             WHERE id = $1 AND status IN ('pending', 'approved') RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to cancel booking", e))
    }
}
