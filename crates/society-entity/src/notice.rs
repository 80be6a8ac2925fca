//! Notice entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A notice posted to the whole society or addressed to one resident.
///
/// Notices are immutable once posted; the only mutation is admin delete
/// and the `has_poll` flag flipped when a poll is attached.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notice {
    /// Unique notice identifier.
    pub id: Uuid,
    /// Notice title.
    pub title: String,
    /// Notice body text.
    pub body: Option<String>,
    /// The posting user.
    pub author_id: Option<Uuid>,
    /// Addressed recipient; `None` means broadcast to all residents.
    pub recipient_id: Option<Uuid>,
    /// Pinned to the top of the board.
    pub pinned: bool,
    /// Whether a poll is attached to this notice.
    pub has_poll: bool,
    /// When the notice was posted.
    pub created_at: DateTime<Utc>,
}

/// Notice joined with the author's name and email for list responses.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct NoticeWithAuthor {
    pub id: Uuid,
    pub title: String,
    pub body: Option<String>,
    pub author_id: Option<Uuid>,
    /// Author's name, if the author still exists.
    pub author_name: Option<String>,
    /// Author's email.
    pub author_email: Option<String>,
    pub recipient_id: Option<Uuid>,
    pub pinned: bool,
    pub has_poll: bool,
    pub created_at: DateTime<Utc>,
}

/// Data required to post a new notice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNotice {
    pub title: String,
    pub body: Option<String>,
    pub author_id: Uuid,
    pub recipient_id: Option<Uuid>,
    pub pinned: bool,
}
