use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::ApiError;
use super::TaskData;
use crate::domain::task::ports::TaskServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// GET /api/task/user
///
/// Lists the tasks owned by the authenticated subject.
pub async fn list_user_tasks(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<TaskData>>, ApiError> {
    let tasks = state
        .task_service
        .list_tasks_by_owner(&auth_user.user_id)
        .await?;

    Ok(Json(tasks.iter().map(TaskData::from).collect()))
}
