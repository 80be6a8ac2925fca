//! Booking status enum and its transition table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a facility booking.
///
/// Transition table exposed by the API:
///
/// | from     | to                  | who            | endpoint        |
/// |----------|---------------------|----------------|-----------------|
/// | pending  | approved, rejected  | admin          | status endpoint |
/// | pending  | cancelled           | owner or admin | cancel endpoint |
/// | approved | cancelled           | owner or admin | cancel endpoint |
/// | any      | any                 | admin          | status endpoint |
///
/// The admin status endpoint deliberately permits any target from any
/// source; the cancel endpoint enforces the narrower
/// `{pending, approved}` precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Awaiting admin approval.
    Pending,
    /// Approved by an admin.
    Approved,
    /// Rejected by an admin. Terminal.
    Rejected,
    /// Cancelled by the owner or an admin. Terminal.
    Cancelled,
}

impl BookingStatus {
    /// Whether the cancel endpoint accepts a booking in this status.
    pub fn can_cancel(self) -> bool {
        matches!(self, Self::Pending | Self::Approved)
    }

    /// Whether this status has no further exposed transition outside the
    /// admin force-status path.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Rejected | Self::Cancelled)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = society_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(society_core::AppError::validation(format!(
                "Invalid booking status: '{s}'"
            ))),
        }
    }
}
