use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::database::StoreError;

pub const DEFAULT_SEVERITY: &str = "unknown";

/// A persisted disaster report. Serialized field names match the public API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Report {
    pub id: Uuid,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub report_type: String,
    pub location: String,
    pub severity: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Incoming report fields, before validation. Used by both create and update
/// so the two operations enforce identical requirements.
#[derive(Debug, Deserialize)]
pub struct ReportDraft {
    #[serde(rename = "type")]
    pub report_type: Option<String>,
    pub location: Option<String>,
    pub severity: Option<String>,
}

/// A draft that passed validation: type and location are non-empty,
/// severity is defaulted.
#[derive(Debug, Clone)]
pub struct ValidReport {
    pub report_type: String,
    pub location: String,
    pub severity: String,
}

impl ReportDraft {
    /// Validate required fields before any store write. Whitespace-only
    /// values count as missing.
    pub fn validate(self) -> Result<ValidReport, StoreError> {
        let report_type = self
            .report_type
            .filter(|s| !s.trim().is_empty())
            .ok_or(StoreError::MissingField("type"))?;

        let location = self
            .location
            .filter(|s| !s.trim().is_empty())
            .ok_or(StoreError::MissingField("location"))?;

        let severity = self
            .severity
            .unwrap_or_else(|| DEFAULT_SEVERITY.to_string());

        Ok(ValidReport {
            report_type,
            location,
            severity,
        })
    }
}
