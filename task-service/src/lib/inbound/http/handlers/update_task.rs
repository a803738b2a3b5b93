use axum::extract::Path;
use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::TaskStatus;
use crate::domain::task::models::TaskTitle;
use crate::domain::task::models::UpdateTaskCommand;
use crate::domain::task::ports::TaskServicePort;
use crate::inbound::http::router::AppState;
use crate::task::errors::TaskError;

/// HTTP request body for updating a task (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateTaskRequestBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<String>,
}

impl UpdateTaskRequestBody {
    fn try_into_command(self) -> Result<UpdateTaskCommand, TaskError> {
        // Validation happens here - errors are automatically converted via #[from]
        let title = self.title.map(TaskTitle::new).transpose()?;

        let status = self
            .status
            .as_deref()
            .map(TaskStatus::parse)
            .transpose()?;

        Ok(UpdateTaskCommand {
            title,
            description: self.description,
            due_date: self.due_date,
            status,
        })
    }
}

/// PUT /api/task/:task_id
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    Json(body): Json<UpdateTaskRequestBody>,
) -> Result<Json<UpdateTaskResponseData>, ApiError> {
    let task_id =
        TaskId::from_string(&task_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let command = body.try_into_command()?;

    state.task_service.update_task(&task_id, command).await?;

    Ok(Json(UpdateTaskResponseData {
        message: "Tarea actualizada".to_string(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateTaskResponseData {
    pub message: String,
}
