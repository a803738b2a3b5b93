use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<Json<LoginResponseData>, ApiError> {
    // An address that cannot be parsed cannot match any stored user.
    let email = EmailAddress::new(body.email)
        .map_err(|_| ApiError::NotFound("Usuario no encontrado".to_string()))?;

    let user = state
        .user_service
        .get_user_by_email(&email)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByEmail(_) => {
                ApiError::NotFound("Usuario no encontrado".to_string())
            }
            _ => ApiError::from(e),
        })?;

    // Argon2 verification is CPU-bound, keep it off the async workers.
    let authenticator = Arc::clone(&state.authenticator);
    let password = body.password;
    let stored_hash = user.password_hash.clone();
    let subject = user.id.0;
    let result = tokio::task::spawn_blocking(move || {
        authenticator.authenticate(&password, &stored_hash, subject)
    })
    .await
    .map_err(|e| ApiError::InternalServerError(e.to_string()))?
    .map_err(|e| match e {
        auth::AuthenticationError::InvalidCredentials => {
            ApiError::Unauthorized("Credenciales inválidas".to_string())
        }
        auth::AuthenticationError::PasswordError(err) => {
            ApiError::InternalServerError(format!("Password verification failed: {}", err))
        }
        auth::AuthenticationError::TokenError(err) => {
            ApiError::InternalServerError(format!("Token generation failed: {}", err))
        }
    })?;

    Ok(Json(LoginResponseData {
        message: "Login exitoso".to_string(),
        token: result.access_token,
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub message: String,
    pub token: String,
}
