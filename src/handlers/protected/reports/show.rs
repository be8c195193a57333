use axum::{
    extract::{Path, State},
    Json,
};

use super::parse_report_id;
use crate::database::models::Report;
use crate::error::ApiError;
use crate::AppState;

/// GET /reports/:id - show a single report
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Report>, ApiError> {
    let id = parse_report_id(&id)?;
    let report = state.reports.get(id).await?;
    Ok(Json(report))
}
