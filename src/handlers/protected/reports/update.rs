use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use super::parse_report_id;
use crate::database::models::ReportDraft;
use crate::error::ApiError;
use crate::AppState;

/// PUT /reports/:id - replace type, location, and severity
///
/// Applies the same field validation as create.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<ReportDraft>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_report_id(&id)?;
    let report = state.reports.update(id, draft).await?;

    Ok(Json(json!({
        "message": "Report updated successfully",
        "report": report
    })))
}
