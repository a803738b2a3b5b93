use axum::extract::Path;
use axum::extract::State;
use axum::Json;

use super::ApiError;
use super::UserData;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// GET /api/user/:user_id
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserData>, ApiError> {
    let user_id =
        UserId::from_string(&user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let user = state.user_service.get_user(&user_id).await?;

    Ok(Json(UserData::from(&user)))
}
