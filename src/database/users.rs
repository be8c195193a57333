use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::OsRng;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::{UserRecord, DEFAULT_ROLE};
use crate::database::{is_unique_violation, StoreError};

/// Credential store: user records keyed by unique email.
#[derive(Clone)]
pub struct UserStore {
    pool: PgPool,
}

impl UserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a user with the default role. The email unique index is the
    /// single source of truth for duplicates; a violation surfaces as
    /// `StoreError::Conflict`.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserRecord, StoreError> {
        let password_hash = hash_password(password)?;

        sqlx::query_as::<_, UserRecord>(
            "INSERT INTO users (id, name, email, password_hash, role)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, name, email, password_hash, role, created_at",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(&password_hash)
        .bind(DEFAULT_ROLE)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StoreError::Conflict("email")
            } else {
                e.into()
            }
        })
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let user = sqlx::query_as::<_, UserRecord>(
            "SELECT id, name, email, password_hash, role, created_at
             FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

/// One-way salted hash. Argon2 default parameters carry the cost factor.
pub fn hash_password(password: &str) -> Result<String, StoreError> {
    if password.trim().is_empty() {
        return Err(StoreError::MissingField("password"));
    }

    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| StoreError::PasswordHash(err.to_string()))
}

/// Constant-time verification against the stored hash. An unparseable stored
/// hash counts as a mismatch rather than an error.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
