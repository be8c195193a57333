use axum::{extract::State, Json};

use crate::database::models::Report;
use crate::error::ApiError;
use crate::AppState;

/// GET /reports - all reports, store-native order
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Report>>, ApiError> {
    let reports = state.reports.list_all().await?;
    Ok(Json(reports))
}
