use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::TaskTitle;
use crate::domain::task::ports::TaskServicePort;
use crate::domain::user::models::UserId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::task::errors::TaskTitleError;

/// POST /api/task
///
/// The owner is always the authenticated subject; it cannot be set from the
/// request body.
pub async fn create_task(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<CreateTaskRequestBody>,
) -> Result<(StatusCode, Json<CreateTaskResponseData>), ApiError> {
    let task = state
        .task_service
        .create_task(body.try_into_command(auth_user.user_id)?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateTaskResponseData {
            message: "Tarea creada".to_string(),
            id: task.id.to_string(),
        }),
    ))
}

/// HTTP request body for creating a task (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTaskRequestBody {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    due_date: Option<NaiveDate>,
}

impl CreateTaskRequestBody {
    fn try_into_command(self, owner: UserId) -> Result<CreateTaskCommand, TaskTitleError> {
        let title = TaskTitle::new(self.title)?;
        Ok(CreateTaskCommand::new(
            title,
            self.description,
            self.due_date,
            owner,
        ))
    }
}

impl From<TaskTitleError> for ApiError {
    fn from(err: TaskTitleError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTaskResponseData {
    pub message: String,
    pub id: String,
}
