use axum::extract::State;
use axum::Json;

use super::ApiError;
use super::TaskData;
use crate::domain::task::ports::TaskServicePort;
use crate::inbound::http::router::AppState;

/// GET /api/task
///
/// Lists every task regardless of owner.
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<TaskData>>, ApiError> {
    let tasks = state.task_service.list_tasks().await?;

    Ok(Json(tasks.iter().map(TaskData::from).collect()))
}
