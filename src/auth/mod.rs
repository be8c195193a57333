use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Claims carried by a bearer token. Stateless: identity and role only,
/// verified by signature and expiry on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("signing secret is not configured")]
    MissingSecret,

    #[error("token encoding failed: {0}")]
    Encode(String),

    #[error("invalid token: {0}")]
    Invalid(String),
}

/// Issues and verifies HS256 bearer tokens with a process-wide secret.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    expiry_hours: i64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, expiry_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiry_hours,
        }
    }

    pub fn issue(&self, user_id: Uuid, role: &str) -> Result<String, TokenError> {
        if self.secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }

        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            role: role.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.expiry_hours)).timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());
        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| TokenError::Encode(e.to_string()))
    }

    /// Rejects malformed tokens, signature mismatches, and expired tokens.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        if self.secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }

        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let validation = Validation::default();

        decode::<Claims>(token, &decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::Invalid(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("unit-test-secret", 1)
    }

    #[test]
    fn issue_then_verify_roundtrip() {
        let svc = service();
        let user_id = Uuid::new_v4();

        let token = svc.issue(user_id, "USER").expect("issue");
        let claims = svc.verify(&token).expect("verify");

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.role, "USER");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn tampered_token_is_rejected() {
        let svc = service();
        let other = TokenService::new("some-other-secret", 1);

        let token = other.issue(Uuid::new_v4(), "USER").expect("issue");
        assert!(matches!(svc.verify(&token), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn expired_token_is_rejected() {
        // Negative expiry puts exp well past the default validation leeway
        let svc = TokenService::new("unit-test-secret", -2);

        let token = svc.issue(Uuid::new_v4(), "USER").expect("issue");
        assert!(matches!(svc.verify(&token), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn malformed_token_is_rejected() {
        let svc = service();
        assert!(svc.verify("not-a-token").is_err());
    }

    #[test]
    fn empty_secret_refuses_to_issue() {
        let svc = TokenService::new("", 1);
        assert!(matches!(
            svc.issue(Uuid::new_v4(), "USER"),
            Err(TokenError::MissingSecret)
        ));
    }
}
