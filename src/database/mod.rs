use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

pub mod models;
pub mod reports;
pub mod users;

pub use reports::ReportStore;
pub use users::UserStore;

/// Errors from the persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("duplicate {0}")]
    Conflict(&'static str),

    #[error("record not found")]
    NotFound,

    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Build the shared connection pool. Connects lazily so the process can start
/// (and serve public routes) before the database is reachable.
pub fn connect(config: &DatabaseConfig) -> Result<PgPool, StoreError> {
    let url = config
        .url
        .as_deref()
        .ok_or(StoreError::ConfigMissing("DATABASE_URL"))?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_lazy(url)?;

    Ok(pool)
}

/// Create the users/reports tables when they do not exist yet, so the service
/// is self-contained against an empty database.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id uuid PRIMARY KEY,
            name text NOT NULL,
            email text NOT NULL,
            password_hash text NOT NULL,
            role text NOT NULL DEFAULT 'USER',
            created_at timestamptz NOT NULL DEFAULT now()
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS users_email_key ON users (email)")
        .execute(pool)
        .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS reports (
            id uuid PRIMARY KEY,
            type text NOT NULL,
            location text NOT NULL,
            severity text NOT NULL DEFAULT 'unknown',
            created_at timestamptz NOT NULL DEFAULT now()
        )",
    )
    .execute(pool)
    .await?;

    info!("Database schema verified");
    Ok(())
}

/// Postgres unique-violation, used to detect duplicate emails at insert time.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.code().as_deref() == Some("23505"),
        _ => false,
    }
}
