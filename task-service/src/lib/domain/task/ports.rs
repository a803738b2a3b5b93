use async_trait::async_trait;

use crate::domain::task::errors::TaskError;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::UpdateTaskCommand;
use crate::domain::user::models::UserId;

/// Port for task domain service operations.
#[async_trait]
pub trait TaskServicePort: Send + Sync + 'static {
    /// Create a new task owned by the given user.
    ///
    /// # Returns
    /// Created task entity, starting in the `pendiente` status
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_task(&self, command: CreateTaskCommand) -> Result<Task, TaskError>;

    /// Retrieve task by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_task(&self, id: &TaskId) -> Result<Task, TaskError>;

    /// Retrieve all tasks, regardless of owner.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_tasks(&self) -> Result<Vec<Task>, TaskError>;

    /// Retrieve all tasks owned by a user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_tasks_by_owner(&self, owner: &UserId) -> Result<Vec<Task>, TaskError>;

    /// Update an existing task with optional fields.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist
    /// * `UpdateFailed` - Update affected no rows
    /// * `DatabaseError` - Database operation failed
    async fn update_task(&self, id: &TaskId, command: UpdateTaskCommand)
        -> Result<Task, TaskError>;

    /// Delete an existing task.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist
    /// * `DeleteFailed` - Delete affected no rows
    /// * `DatabaseError` - Database operation failed
    async fn delete_task(&self, id: &TaskId) -> Result<(), TaskError>;
}

/// Persistence operations for the task aggregate.
#[async_trait]
pub trait TaskRepository: Send + Sync + 'static {
    /// Persist new task to storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, task: Task) -> Result<Task, TaskError>;

    /// Retrieve task by identifier.
    ///
    /// # Returns
    /// Optional task entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, TaskError>;

    /// Retrieve all tasks from storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Task>, TaskError>;

    /// Retrieve all tasks owned by a user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Task>, TaskError>;

    /// Update existing task in storage.
    ///
    /// # Returns
    /// Number of rows affected (0 if the task vanished)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, task: &Task) -> Result<u64, TaskError>;

    /// Remove task from storage.
    ///
    /// # Returns
    /// Number of rows affected (0 if the task vanished)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &TaskId) -> Result<u64, TaskError>;
}
