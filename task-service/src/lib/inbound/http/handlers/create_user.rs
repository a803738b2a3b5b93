use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::DisplayNameError;
use crate::user::errors::EmailError;
use crate::user::errors::UserError;

/// POST /api/user
///
/// Same flow as registration, but reports a duplicate email with the user
/// management wording instead of the auth one.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequestBody>,
) -> Result<(StatusCode, Json<CreateUserResponseData>), ApiError> {
    let user = state
        .user_service
        .register_user(body.try_into_command()?)
        .await
        .map_err(|e| match e {
            UserError::EmailAlreadyExists(_) => {
                ApiError::BadRequest("El correo ya está registrado".to_string())
            }
            _ => ApiError::from(e),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponseData {
            message: "Usuario creado".to_string(),
            id: user.id.to_string(),
        }),
    ))
}

/// HTTP request body for creating a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequestBody {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateUserRequestError {
    #[error("Invalid name: {0}")]
    Name(#[from] DisplayNameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl CreateUserRequestBody {
    fn try_into_command(self) -> Result<RegisterUserCommand, ParseCreateUserRequestError> {
        let name = DisplayName::new(self.name)?;
        let email = EmailAddress::new(self.email)?;
        Ok(RegisterUserCommand::new(name, email, self.password))
    }
}

impl From<ParseCreateUserRequestError> for ApiError {
    fn from(err: ParseCreateUserRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserResponseData {
    pub message: String,
    pub id: String,
}
