use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

pub const DEFAULT_ROLE: &str = "USER";

/// A user row, including the password hash. Never serialized to clients;
/// signup returns a message and login returns only a token.
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}
