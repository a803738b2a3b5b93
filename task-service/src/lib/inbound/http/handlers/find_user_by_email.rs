use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::UserData;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// POST /api/user/email
///
/// Email lookup goes through a POST body rather than a path segment so
/// addresses never end up in access logs.
pub async fn find_user_by_email(
    State(state): State<AppState>,
    Json(body): Json<FindUserByEmailRequestBody>,
) -> Result<Json<UserData>, ApiError> {
    // An address that cannot be parsed cannot match any stored user.
    let email = EmailAddress::new(body.email)
        .map_err(|_| ApiError::NotFound("Usuario no encontrado".to_string()))?;

    let user = state.user_service.get_user_by_email(&email).await?;

    Ok(Json(UserData::from(&user)))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FindUserByEmailRequestBody {
    email: String,
}
