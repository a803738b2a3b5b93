use axum::extract::Path;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::domain::task::models::TaskId;
use crate::domain::task::ports::TaskServicePort;
use crate::inbound::http::router::AppState;

/// DELETE /api/task/:task_id
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<DeleteTaskResponseData>, ApiError> {
    let task_id =
        TaskId::from_string(&task_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state.task_service.delete_task(&task_id).await?;

    Ok(Json(DeleteTaskResponseData {
        message: "Tarea eliminada".to_string(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteTaskResponseData {
    pub message: String,
}
