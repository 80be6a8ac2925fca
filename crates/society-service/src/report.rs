//! Monthly maintenance report.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use society_auth::policy;
use society_core::error::AppError;
use society_core::result::AppResult;
use society_database::repositories::MaintenanceRepository;
use society_entity::maintenance::MonthlyStat;

use crate::context::RequestContext;

/// Produces the monthly maintenance/complaint statistics report.
#[derive(Debug, Clone)]
pub struct ReportService {
    maintenance_repo: Arc<MaintenanceRepository>,
}

impl ReportService {
    /// Creates a new report service.
    pub fn new(maintenance_repo: Arc<MaintenanceRepository>) -> Self {
        Self { maintenance_repo }
    }

    /// Aggregates one calendar month of requests, grouped by type,
    /// category, and status, with mean resolution hours over resolved
    /// requests. Admin only.
    pub async fn monthly_stats(
        &self,
        ctx: &RequestContext,
        year: i32,
        month: u32,
    ) -> AppResult<Vec<MonthlyStat>> {
        policy::require_admin(ctx.role)?;

        let from = month_start(year, month)?;
        let to = if month == 12 {
            month_start(year + 1, 1)?
        } else {
            month_start(year, month + 1)?
        };

        self.maintenance_repo.monthly_stats(from, to).await
    }
}

fn month_start(year: i32, month: u32) -> AppResult<DateTime<Utc>> {
    let date = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::validation(format!("Invalid month: {year}-{month:02}")))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| AppError::internal("Failed to build month boundary"))?;
    Ok(midnight.and_utc())
}
