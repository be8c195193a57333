use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::Claims;
use crate::error::ApiError;
use crate::AppState;

/// Authenticated user context extracted from a verified bearer token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub role: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            role: claims.role,
        }
    }
}

/// Bearer authentication middleware. The only gate in the system: one check
/// per request, no retry, no session. On success the decoded claims are
/// attached to the request extensions for downstream handlers.
pub async fn bearer_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers).map_err(ApiError::unauthorized)?;

    let claims = state
        .tokens
        .verify(&token)
        .map_err(|_| ApiError::unauthorized("Invalid or expired token"))?;

    request.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get("authorization")
        .ok_or_else(|| "Missing authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid authorization header".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty bearer token".to_string());
        }
        Ok(token.to_string())
    } else {
        Err("Authorization header must use the Bearer scheme".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(v) = value {
            headers.insert("authorization", HeaderValue::from_str(v).unwrap());
        }
        headers
    }

    #[test]
    fn missing_header_is_rejected() {
        let err = extract_bearer_token(&headers_with(None)).unwrap_err();
        assert!(err.contains("Missing"));
    }

    #[test]
    fn non_bearer_scheme_is_rejected() {
        let err = extract_bearer_token(&headers_with(Some("Basic dXNlcjpwdw=="))).unwrap_err();
        assert!(err.contains("Bearer"));
    }

    #[test]
    fn empty_token_is_rejected() {
        assert!(extract_bearer_token(&headers_with(Some("Bearer "))).is_err());
    }

    #[test]
    fn well_formed_header_yields_token() {
        let token = extract_bearer_token(&headers_with(Some("Bearer abc.def.ghi"))).unwrap();
        assert_eq!(token, "abc.def.ghi");
    }
}
