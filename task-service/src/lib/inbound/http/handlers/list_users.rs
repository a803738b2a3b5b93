use axum::extract::State;
use axum::Json;

use super::ApiError;
use super::UserData;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// GET /api/user
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserData>>, ApiError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.iter().map(UserData::from).collect()))
}
