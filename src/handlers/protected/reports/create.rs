use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::database::models::ReportDraft;
use crate::error::ApiError;
use crate::AppState;

/// POST /reports - submit a new disaster report
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<ReportDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let report = state.reports.create(draft).await?;

    tracing::info!(report_id = %report.id, "report created");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Report created successfully",
            "report": report
        })),
    ))
}
