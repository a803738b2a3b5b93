use thiserror::Error;

use crate::user::errors::UserIdError;

/// Error for TaskId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for TaskTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskTitleError {
    #[error("Title must not be empty")]
    Empty,

    #[error("Title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for TaskStatus parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskStatusError {
    #[error("Unknown task status: {0}")]
    Unknown(String),
}

/// Top-level error for all task-related operations
#[derive(Debug, Clone, Error)]
pub enum TaskError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid task ID: {0}")]
    InvalidTaskId(#[from] TaskIdError),

    #[error("Invalid title: {0}")]
    InvalidTitle(#[from] TaskTitleError),

    #[error("Invalid status: {0}")]
    InvalidStatus(#[from] TaskStatusError),

    #[error("Invalid owner ID: {0}")]
    InvalidOwnerId(#[from] UserIdError),

    // Domain-level errors
    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Task update had no effect: {0}")]
    UpdateFailed(String),

    #[error("Task delete had no effect: {0}")]
    DeleteFailed(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
