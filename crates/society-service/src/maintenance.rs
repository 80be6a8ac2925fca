//! Maintenance and complaint request operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use society_auth::policy;
use society_core::error::AppError;
use society_core::result::AppResult;
use society_database::repositories::maintenance::RequestFilter;
use society_database::repositories::MaintenanceRepository;
use society_entity::maintenance::{
    CreateMaintenanceRequest, MaintenanceCategory, MaintenancePriority, MaintenanceRequest,
    MaintenanceRequestWithNames, MaintenanceStatus, RequestType,
};

use crate::context::RequestContext;

/// Data for filing a maintenance job or complaint.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FileRequestRequest {
    pub title: String,
    pub description: String,
    pub request_type: RequestType,
    pub category: MaintenanceCategory,
    pub priority: MaintenancePriority,
    pub location: String,
}

/// Data for the admin status update.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UpdateStatusRequest {
    pub status: MaintenanceStatus,
    pub assigned_to: Option<Uuid>,
    pub admin_comments: Option<String>,
}

/// Handles maintenance/complaint requests and their lifecycle.
#[derive(Debug, Clone)]
pub struct MaintenanceService {
    maintenance_repo: Arc<MaintenanceRepository>,
}

impl MaintenanceService {
    /// Creates a new maintenance service.
    pub fn new(maintenance_repo: Arc<MaintenanceRepository>) -> Self {
        Self { maintenance_repo }
    }

    /// Files a new request in `pending` status, owned by the requester.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: FileRequestRequest,
    ) -> AppResult<MaintenanceRequest> {
        if req.title.trim().is_empty() {
            return Err(AppError::validation("Title cannot be empty"));
        }
        if req.description.trim().is_empty() {
            return Err(AppError::validation("Description cannot be empty"));
        }
        if req.location.trim().is_empty() {
            return Err(AppError::validation("Location cannot be empty"));
        }

        let request = self
            .maintenance_repo
            .create(&CreateMaintenanceRequest {
                title: req.title.trim().to_string(),
                description: req.description.trim().to_string(),
                request_type: req.request_type,
                category: req.category,
                priority: req.priority,
                location: req.location.trim().to_string(),
                user_id: ctx.user_id,
            })
            .await?;

        info!(
            request_id = %request.id,
            request_type = %request.request_type,
            user_id = %ctx.user_id,
            "Request filed"
        );
        Ok(request)
    }

    /// Lists the requester's own requests.
    pub async fn list_mine(&self, ctx: &RequestContext) -> AppResult<Vec<MaintenanceRequest>> {
        self.maintenance_repo.find_by_user(ctx.user_id).await
    }

    /// Lists all requests with filters. Admin only.
    pub async fn list_all(
        &self,
        ctx: &RequestContext,
        filter: RequestFilter,
    ) -> AppResult<Vec<MaintenanceRequestWithNames>> {
        policy::require_admin(ctx.role)?;
        self.maintenance_repo.find_all(&filter).await
    }

    /// Returns one request. Owner or admin.
    pub async fn get(&self, ctx: &RequestContext, request_id: Uuid) -> AppResult<MaintenanceRequest> {
        let request = self
            .maintenance_repo
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::not_found("Request not found"))?;

        policy::check_owner_or_admin(ctx.user_id, ctx.role, request.user_id)?;
        Ok(request)
    }

    /// Advances a request through its lifecycle. Admin only; the
    /// transition must be one the status table allows. Entering
    /// `resolved` stamps the resolution time.
    pub async fn set_status(
        &self,
        ctx: &RequestContext,
        request_id: Uuid,
        req: UpdateStatusRequest,
    ) -> AppResult<MaintenanceRequest> {
        policy::require_admin(ctx.role)?;

        let request = self
            .maintenance_repo
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::not_found("Request not found"))?;

        if !request.status.admin_can_set(req.status) {
            return Err(AppError::conflict(format!(
                "Cannot move request from '{}' to '{}'",
                request.status, req.status
            )));
        }

        let updated = self
            .maintenance_repo
            .update_status(
                request_id,
                req.status,
                req.assigned_to,
                req.admin_comments.as_deref(),
            )
            .await?;

        info!(
            request_id = %request_id,
            from = %request.status,
            to = %req.status,
            by = %ctx.user_id,
            "Request status updated"
        );
        Ok(updated)
    }

    /// Withdraws a request. Owner or admin; only `pending` and
    /// `in_progress` requests can be cancelled.
    pub async fn cancel(&self, ctx: &RequestContext, request_id: Uuid) -> AppResult<MaintenanceRequest> {
        let request = self
            .maintenance_repo
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::not_found("Request not found"))?;

        policy::check_owner_or_admin(ctx.user_id, ctx.role, request.user_id)?;

        if !request.status.can_cancel() {
            return Err(AppError::conflict(format!(
                "Request in status '{}' cannot be cancelled",
                request.status
            )));
        }

        let updated = self
            .maintenance_repo
            .update_status(request_id, MaintenanceStatus::Cancelled, None, None)
            .await?;

        info!(request_id = %request_id, by = %ctx.user_id, "Request cancelled");
        Ok(updated)
    }
}
