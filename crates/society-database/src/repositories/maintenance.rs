//! Maintenance/complaint request repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use society_core::error::{AppError, ErrorKind};
use society_core::result::AppResult;
use society_entity::maintenance::{
    CreateMaintenanceRequest, MaintenanceCategory, MaintenanceRequest,
    MaintenanceRequestWithNames, MaintenanceStatus, MonthlyStat, RequestType,
};

const WITH_NAMES_SELECT: &str =
    "SELECT r.id, r.title, r.description, r.request_type, r.category, r.priority, r.status, \
            r.location, r.user_id, u.name AS user_name, u.email AS user_email, \
            r.assigned_to, a.name AS assigned_to_name, r.admin_comments, r.resolved_at, \
            r.created_at \
     FROM maintenance_requests r \
     JOIN users u ON u.id = r.user_id \
     LEFT JOIN users a ON a.id = r.assigned_to";

/// Filters for the admin request listing. All fields are optional and
/// combine with AND.
#[derive(Debug, Clone, Default)]
pub struct RequestFilter {
    pub request_type: Option<RequestType>,
    pub category: Option<MaintenanceCategory>,
    pub status: Option<MaintenanceStatus>,
    /// Only requests filed at or after this instant.
    pub start_date: Option<DateTime<Utc>>,
    /// Only requests filed strictly before this instant.
    pub end_date: Option<DateTime<Utc>>,
}

/// Repository for maintenance and complaint requests.
#[derive(Debug, Clone)]
pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    /// Create a new maintenance repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a request by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<MaintenanceRequest>> {
        sqlx::query_as::<_, MaintenanceRequest>("SELECT * FROM maintenance_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find request", e))
    }

    /// List one user's requests, newest first.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<MaintenanceRequest>> {
        sqlx::query_as::<_, MaintenanceRequest>(
            "SELECT * FROM maintenance_requests WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list requests", e))
    }

    /// List requests with names, applying the given filters, newest first.
    pub async fn find_all(&self, filter: &RequestFilter) -> AppResult<Vec<MaintenanceRequestWithNames>> {
        let mut sql = String::from(WITH_NAMES_SELECT);
        let mut conditions = Vec::new();
        if filter.request_type.is_some() {
            conditions.push(format!("r.request_type = ${}", conditions.len() + 1));
        }
        if filter.category.is_some() {
            conditions.push(format!("r.category = ${}", conditions.len() + 1));
        }
        if filter.status.is_some() {
            conditions.push(format!("r.status = ${}", conditions.len() + 1));
        }
        if filter.start_date.is_some() {
            conditions.push(format!("r.created_at >= ${}", conditions.len() + 1));
        }
        if filter.end_date.is_some() {
            conditions.push(format!("r.created_at < ${}", conditions.len() + 1));
        }
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY r.created_at DESC");

        let mut query = sqlx::query_as::<_, MaintenanceRequestWithNames>(&sql);
        if let Some(request_type) = filter.request_type {
            query = query.bind(request_type);
        }
        if let Some(category) = filter.category {
            query = query.bind(category);
        }
        if let Some(status) = filter.status {
            query = query.bind(status);
        }
        if let Some(start_date) = filter.start_date {
            query = query.bind(start_date);
        }
        if let Some(end_date) = filter.end_date {
            query = query.bind(end_date);
        }

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list requests", e))
    }

    /// File a new request in `pending` status.
    pub async fn create(&self, data: &CreateMaintenanceRequest) -> AppResult<MaintenanceRequest> {
        sqlx::query_as::<_, MaintenanceRequest>(
            "INSERT INTO maintenance_requests \
                (title, description, request_type, category, priority, location, user_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.request_type)
        .bind(data.category)
        .bind(data.priority)
        .bind(&data.location)
        .bind(data.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create request", e))
    }

    /// Set a request's status, stamping `resolved_at` when it enters
    /// `resolved`. Optionally records assignee and admin comments.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: MaintenanceStatus,
        assigned_to: Option<Uuid>,
        admin_comments: Option<&str>,
    ) -> AppResult<MaintenanceRequest> {
        sqlx::query_as::<_, MaintenanceRequest>(
            "UPDATE maintenance_requests \
             SET status = $2, \
                 assigned_to = COALESCE($3, assigned_to), \
                 admin_comments = COALESCE($4, admin_comments), \
                 resolved_at = CASE WHEN $2 = 'resolved'::maintenance_status \
                                    THEN NOW() ELSE resolved_at END \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(assigned_to)
        .bind(admin_comments)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update request status", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Request {id} not found")))
    }

    /// Monthly aggregate: request counts grouped by type, category, and
    /// status over one calendar month, with mean resolution hours over
    /// the resolved rows of each group.
    pub async fn monthly_stats(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<MonthlyStat>> {
        sqlx::query_as::<_, MonthlyStat>(
            "SELECT request_type, category, status, COUNT(*) AS count, \
                    (AVG(EXTRACT(EPOCH FROM resolved_at - created_at) / 3600.0) \
                        FILTER (WHERE resolved_at IS NOT NULL))::double precision \
                        AS avg_resolution_hours \
             FROM maintenance_requests \
             WHERE created_at >= $1 AND created_at < $2 \
             GROUP BY request_type, category, status \
             ORDER BY request_type, category, status",
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to compute stats", e))
    }
}
