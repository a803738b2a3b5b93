use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use uuid::Uuid;

use crate::task::errors::TaskIdError;
use crate::task::errors::TaskStatusError;
use crate::task::errors::TaskTitleError;
use crate::user::models::UserId;

/// Task aggregate entity.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: TaskId,
    pub title: TaskTitle,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub status: TaskStatus,
    pub owner: UserId,
    pub created_at: DateTime<Utc>,
}

/// Task unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub Uuid);

impl TaskId {
    /// Generate a new random task ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a task ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, TaskIdError> {
        Uuid::parse_str(s)
            .map(TaskId)
            .map_err(|e| TaskIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Task title value type
///
/// Ensures the title is non-empty (after trimming) and at most 200 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTitle(String);

impl TaskTitle {
    const MAX_LENGTH: usize = 200;

    /// Create a new valid task title.
    ///
    /// # Errors
    /// * `Empty` - Title is empty or whitespace only
    /// * `TooLong` - Title longer than 200 characters
    pub fn new(title: String) -> Result<Self, TaskTitleError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(TaskTitleError::Empty);
        }

        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(TaskTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the title as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Lifecycle state of a task.
///
/// Stored and serialized with the wire values `pendiente` and `completada`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    /// Wire/storage representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pendiente",
            TaskStatus::Completed => "completada",
        }
    }

    /// Parse a status from its wire/storage representation.
    ///
    /// # Errors
    /// * `Unknown` - Value is neither `pendiente` nor `completada`
    pub fn parse(s: &str) -> Result<Self, TaskStatusError> {
        match s {
            "pendiente" => Ok(TaskStatus::Pending),
            "completada" => Ok(TaskStatus::Completed),
            other => Err(TaskStatusError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command to create a new task with domain types
#[derive(Debug)]
pub struct CreateTaskCommand {
    pub title: TaskTitle,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub owner: UserId,
}

impl CreateTaskCommand {
    /// Construct a new create task command.
    ///
    /// The task starts in the default `pendiente` status.
    pub fn new(
        title: TaskTitle,
        description: String,
        due_date: Option<NaiveDate>,
        owner: UserId,
    ) -> Self {
        Self {
            title,
            description,
            due_date,
            owner,
        }
    }
}

/// Command to update an existing task with optional validated fields.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated.
#[derive(Debug)]
pub struct UpdateTaskCommand {
    pub title: Option<TaskTitle>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<TaskStatus>,
}
