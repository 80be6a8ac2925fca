//! Maintenance/complaint request entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::category::{MaintenanceCategory, MaintenancePriority, RequestType};
use super::status::MaintenanceStatus;

/// A maintenance job or complaint filed by a resident.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceRequest {
    /// Unique request identifier.
    pub id: Uuid,
    /// Short title.
    pub title: String,
    /// Full description of the issue.
    pub description: String,
    /// Maintenance or complaint.
    pub request_type: RequestType,
    /// Category of the issue.
    pub category: MaintenanceCategory,
    /// Priority assigned at filing time.
    pub priority: MaintenancePriority,
    /// Current lifecycle status.
    pub status: MaintenanceStatus,
    /// Where in the society the issue is.
    pub location: String,
    /// Owner: the resident who filed the request.
    pub user_id: Uuid,
    /// Staff member the request is assigned to, if any.
    pub assigned_to: Option<Uuid>,
    /// Free-form comments left by the handling admin.
    pub admin_comments: Option<String>,
    /// Set exactly when the status transitions to `resolved`.
    pub resolved_at: Option<DateTime<Utc>>,
    /// When the request was filed.
    pub created_at: DateTime<Utc>,
}

/// Request joined with the owner's and assignee's names for responses.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceRequestWithNames {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub request_type: RequestType,
    pub category: MaintenanceCategory,
    pub priority: MaintenancePriority,
    pub status: MaintenanceStatus,
    pub location: String,
    pub user_id: Uuid,
    /// Filing resident's name.
    pub user_name: String,
    /// Filing resident's email.
    pub user_email: String,
    pub assigned_to: Option<Uuid>,
    /// Assignee's name, if assigned.
    pub assigned_to_name: Option<String>,
    pub admin_comments: Option<String>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// One aggregate row of the monthly maintenance report, grouped by
/// request type, category, and status.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MonthlyStat {
    pub request_type: RequestType,
    pub category: MaintenanceCategory,
    pub status: MaintenanceStatus,
    /// Number of requests in this group.
    pub count: i64,
    /// Mean hours from filing to resolution, over resolved requests only.
    pub avg_resolution_hours: Option<f64>,
}

/// Data required to file a new request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMaintenanceRequest {
    pub title: String,
    pub description: String,
    pub request_type: RequestType,
    pub category: MaintenanceCategory,
    pub priority: MaintenancePriority,
    pub location: String,
    pub user_id: Uuid,
}
