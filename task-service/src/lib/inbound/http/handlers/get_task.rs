use axum::extract::Path;
use axum::extract::State;
use axum::Json;

use super::ApiError;
use super::TaskData;
use crate::domain::task::models::TaskId;
use crate::domain::task::ports::TaskServicePort;
use crate::inbound::http::router::AppState;

/// GET /api/task/:task_id
pub async fn get_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<TaskData>, ApiError> {
    let task_id =
        TaskId::from_string(&task_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let task = state.task_service.get_task(&task_id).await?;

    Ok(Json(TaskData::from(&task)))
}
