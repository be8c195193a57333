use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use super::parse_report_id;
use crate::error::ApiError;
use crate::AppState;

/// DELETE /reports/:id - remove a report (hard delete)
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_report_id(&id)?;
    state.reports.delete(id).await?;

    Ok(Json(json!({ "message": "Report deleted successfully" })))
}
