use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::users::verify_password;
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /login - authenticate and receive a bearer token
///
/// Unknown email and wrong password produce the same response, so the
/// endpoint does not reveal which emails are registered.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let user = state
        .users
        .find_by_email(&payload.email)
        .await?
        .ok_or_else(invalid_credentials)?;

    if !verify_password(&payload.password, &user.password_hash) {
        return Err(invalid_credentials());
    }

    let token = state.tokens.issue(user.id, &user.role).map_err(|err| {
        tracing::error!("token issue failed: {}", err);
        ApiError::internal_server_error("Unable to issue authentication token")
    })?;

    Ok(Json(json!({ "token": token })))
}

fn invalid_credentials() -> ApiError {
    ApiError::bad_request("Invalid email or password")
}
