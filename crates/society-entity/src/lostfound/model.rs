//! Lost-and-found entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::{LostFoundStatus, LostFoundType};

/// A lost or found item posting.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LostFoundItem {
    /// Unique item identifier.
    pub id: Uuid,
    /// Lost or found.
    pub item_type: LostFoundType,
    /// Short title of the item.
    pub title: String,
    /// Longer description.
    pub description: Option<String>,
    /// Where the item was lost/found.
    pub location: String,
    /// When the item was lost/found.
    pub date: NaiveDate,
    /// Relative path of the stored image, if one was uploaded
    /// (e.g. `/uploads/lostfound/image-....jpg`).
    pub image_path: Option<String>,
    /// Posting status.
    pub status: LostFoundStatus,
    /// Owner: the user who posted the item.
    pub user_id: Uuid,
    /// Contact details for the poster.
    pub contact: String,
    /// When the posting was created.
    pub created_at: DateTime<Utc>,
}

/// Item joined with the poster's name and email for list responses.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LostFoundItemWithUser {
    pub id: Uuid,
    pub item_type: LostFoundType,
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub date: NaiveDate,
    pub image_path: Option<String>,
    pub status: LostFoundStatus,
    pub user_id: Uuid,
    /// Poster's name.
    pub user_name: String,
    /// Poster's email.
    pub user_email: String,
    pub contact: String,
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new item posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLostFoundItem {
    pub item_type: LostFoundType,
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub date: NaiveDate,
    pub image_path: Option<String>,
    pub user_id: Uuid,
    pub contact: String,
}
