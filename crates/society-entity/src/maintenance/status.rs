//! Maintenance request status enum and its transition table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a maintenance/complaint request.
///
/// Transition table exposed by the API:
///
/// | from        | to                    | who            | endpoint        |
/// |-------------|-----------------------|----------------|-----------------|
/// | pending     | in_progress, resolved | admin          | status endpoint |
/// | in_progress | resolved              | admin          | status endpoint |
/// | pending     | cancelled             | owner or admin | cancel endpoint |
/// | in_progress | cancelled             | owner or admin | cancel endpoint |
///
/// Entering `resolved` stamps `resolved_at`. `resolved` and `cancelled`
/// are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "maintenance_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    /// Filed, not yet picked up.
    Pending,
    /// Being worked on.
    InProgress,
    /// Work completed. Terminal.
    Resolved,
    /// Withdrawn by the owner or an admin. Terminal.
    Cancelled,
}

impl MaintenanceStatus {
    /// Whether the admin status endpoint accepts the transition
    /// `self → to`.
    pub fn admin_can_set(self, to: MaintenanceStatus) -> bool {
        matches!(
            (self, to),
            (Self::Pending, Self::InProgress)
                | (Self::Pending, Self::Resolved)
                | (Self::InProgress, Self::Resolved)
        )
    }

    /// Whether the cancel endpoint accepts a request in this status.
    pub fn can_cancel(self) -> bool {
        matches!(self, Self::Pending | Self::InProgress)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved | Self::Cancelled)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MaintenanceStatus {
    type Err = society_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(society_core::AppError::validation(format!(
                "Invalid maintenance status: '{s}'"
            ))),
        }
    }
}
