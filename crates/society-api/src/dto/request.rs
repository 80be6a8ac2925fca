//! Request DTOs with validation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use society_entity::booking::BookingStatus;
use society_entity::lostfound::LostFoundType;
use society_entity::maintenance::{
    MaintenanceCategory, MaintenancePriority, MaintenanceStatus, RequestType,
};

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Full name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Residential block.
    pub block: Option<String>,
    /// Flat number.
    pub flat: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Profile update request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub block: Option<String>,
    pub flat: Option<String>,
}

/// Notice posting request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PostNoticeRequest {
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,
    pub body: Option<String>,
    /// Addressed recipient; omit to broadcast.
    pub recipient_id: Option<Uuid>,
    #[serde(default)]
    pub pinned: bool,
}

/// Poll creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePollRequest {
    #[validate(length(min = 1, message = "Question is required"))]
    pub question: String,
    pub end_date: DateTime<Utc>,
    #[validate(length(min = 2, message = "A poll needs at least two options"))]
    pub options: Vec<String>,
}

/// Vote request body, shared by first votes and vote changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteRequest {
    pub option_id: Uuid,
}

/// Facility booking request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookFacilityRequest {
    #[validate(length(min = 1, message = "Facility is required"))]
    pub facility: String,
    pub date: NaiveDate,
    pub from_time: Option<String>,
    pub to_time: Option<String>,
}

/// Admin booking status override body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingStatusRequest {
    pub status: BookingStatus,
}

/// Query parameters for the admin booking list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingListQuery {
    pub status: Option<BookingStatus>,
}

/// Query parameters for the lost-and-found list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LostFoundListQuery {
    #[serde(rename = "type")]
    pub item_type: Option<LostFoundType>,
}

/// Chat message request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1, max = 2000, message = "Message is required"))]
    pub content: String,
}

/// Maintenance/complaint filing request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FileRequestBody {
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub request_type: RequestType,
    pub category: MaintenanceCategory,
    pub priority: MaintenancePriority,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
}

/// Admin maintenance status update body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceStatusRequest {
    pub status: MaintenanceStatus,
    pub assigned_to: Option<Uuid>,
    pub admin_comments: Option<String>,
}

/// Query parameters for the admin maintenance list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MaintenanceListQuery {
    #[serde(rename = "type")]
    pub request_type: Option<RequestType>,
    pub category: Option<MaintenanceCategory>,
    pub status: Option<MaintenanceStatus>,
    /// Earliest filing date, inclusive.
    pub start_date: Option<chrono::NaiveDate>,
    /// Latest filing date, inclusive.
    pub end_date: Option<chrono::NaiveDate>,
}

/// Query parameters for the monthly report.
#[derive(Debug, Clone, Deserialize)]
pub struct MonthQuery {
    pub year: i32,
    pub month: u32,
}
