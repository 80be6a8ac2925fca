//! Admin report handlers.

use axum::Json;
use axum::extract::{Query, State};

use society_entity::maintenance::MonthlyStat;

use crate::dto::request::MonthQuery;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/reports/maintenance/monthly?year=2025&month=3
pub async fn monthly_maintenance(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<MonthQuery>,
) -> Result<Json<ApiResponse<Vec<MonthlyStat>>>, ApiError> {
    let stats = state
        .report_service
        .monthly_stats(&auth, query.year, query.month)
        .await?;
    Ok(Json(ApiResponse::ok(stats)))
}
