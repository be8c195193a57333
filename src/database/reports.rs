use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::{Report, ReportDraft};
use crate::database::StoreError;

/// Report store: CRUD over disaster report rows. Validation runs before any
/// write, so an invalid draft never reaches the database.
#[derive(Clone)]
pub struct ReportStore {
    pool: PgPool,
}

impl ReportStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, draft: ReportDraft) -> Result<Report, StoreError> {
        let input = draft.validate()?;

        let report = sqlx::query_as::<_, Report>(
            "INSERT INTO reports (id, type, location, severity, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, type, location, severity, created_at",
        )
        .bind(Uuid::new_v4())
        .bind(&input.report_type)
        .bind(&input.location)
        .bind(&input.severity)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(report)
    }

    /// All reports in store-native order.
    pub async fn list_all(&self) -> Result<Vec<Report>, StoreError> {
        let reports = sqlx::query_as::<_, Report>(
            "SELECT id, type, location, severity, created_at FROM reports",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(reports)
    }

    pub async fn get(&self, id: Uuid) -> Result<Report, StoreError> {
        sqlx::query_as::<_, Report>(
            "SELECT id, type, location, severity, created_at FROM reports WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    /// Full-field replace of the three mutable fields. Applies the same
    /// validation as create.
    pub async fn update(&self, id: Uuid, draft: ReportDraft) -> Result<Report, StoreError> {
        let input = draft.validate()?;

        sqlx::query_as::<_, Report>(
            "UPDATE reports SET type = $2, location = $3, severity = $4
             WHERE id = $1
             RETURNING id, type, location, severity, created_at",
        )
        .bind(id)
        .bind(&input.report_type)
        .bind(&input.location)
        .bind(&input.severity)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
