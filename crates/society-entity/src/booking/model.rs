//! Facility booking entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::BookingStatus;

/// A facility booking owned by the resident who created it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: Uuid,
    /// Facility being booked (e.g. "clubhouse").
    pub facility: String,
    /// Owner: the user who created the booking.
    pub user_id: Uuid,
    /// Booking date.
    pub date: NaiveDate,
    /// Start time of the slot (free-form, e.g. "10:00").
    pub from_time: Option<String>,
    /// End time of the slot.
    pub to_time: Option<String>,
    /// Current lifecycle status.
    pub status: BookingStatus,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
}

/// Booking joined with the owner's name and email for list responses.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookingWithUser {
    pub id: Uuid,
    pub facility: String,
    pub user_id: Uuid,
    /// Owner's name.
    pub user_name: String,
    /// Owner's email.
    pub user_email: String,
    pub date: NaiveDate,
    pub from_time: Option<String>,
    pub to_time: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBooking {
    /// Facility name.
    pub facility: String,
    /// Owner user id.
    pub user_id: Uuid,
    /// Booking date.
    pub date: NaiveDate,
    /// Start time.
    pub from_time: Option<String>,
    /// End time.
    pub to_time: Option<String>,
}
