//! Lost-and-found item type and status enums.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether an item was lost or found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "lostfound_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LostFoundType {
    Lost,
    Found,
}

impl LostFoundType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lost => "lost",
            Self::Found => "found",
        }
    }
}

impl fmt::Display for LostFoundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LostFoundType {
    type Err = society_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lost" => Ok(Self::Lost),
            "found" => Ok(Self::Found),
            _ => Err(society_core::AppError::validation(format!(
                "Invalid item type: '{s}'. Expected 'lost' or 'found'"
            ))),
        }
    }
}

/// Posting status of a lost-and-found item.
///
/// The only exposed transition is `open → resolved` (owner or admin);
/// there is no path back to `open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "lostfound_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LostFoundStatus {
    /// Still looking / unclaimed.
    Open,
    /// Item returned or claim closed. Terminal.
    Resolved,
}

impl LostFoundStatus {
    /// Whether a transition from this status to `to` is in the table.
    pub fn can_transition_to(self, to: LostFoundStatus) -> bool {
        matches!((self, to), (Self::Open, Self::Resolved))
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for LostFoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LostFoundStatus {
    type Err = society_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "resolved" => Ok(Self::Resolved),
            _ => Err(society_core::AppError::validation(format!(
                "Invalid item status: '{s}'"
            ))),
        }
    }
}
