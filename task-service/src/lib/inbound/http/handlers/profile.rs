use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::ApiError;
use super::UserData;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// GET /api/auth/profile
///
/// Returns the record of the authenticated subject. The subject id comes from
/// the bearer token, injected by the authentication middleware.
pub async fn profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<Json<UserData>, ApiError> {
    let user = state.user_service.get_user(&auth_user.user_id).await?;

    Ok(Json(UserData::from(&user)))
}
