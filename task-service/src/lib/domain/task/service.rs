use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::TaskStatus;
use crate::domain::task::models::UpdateTaskCommand;
use crate::domain::user::models::UserId;
use crate::task::errors::TaskError;
use crate::task::ports::TaskRepository;
use crate::task::ports::TaskServicePort;

/// Domain service implementation for task operations.
///
/// Concrete implementation of TaskServicePort with dependency injection.
pub struct TaskService<TR>
where
    TR: TaskRepository,
{
    repository: Arc<TR>,
}

impl<TR> TaskService<TR>
where
    TR: TaskRepository,
{
    /// Create a new task service with an injected repository.
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TR> TaskServicePort for TaskService<TR>
where
    TR: TaskRepository,
{
    async fn create_task(&self, command: CreateTaskCommand) -> Result<Task, TaskError> {
        let task = Task {
            id: TaskId::new(),
            title: command.title,
            description: command.description,
            due_date: command.due_date,
            status: TaskStatus::default(),
            owner: command.owner,
            created_at: Utc::now(),
        };

        self.repository.create(task).await
    }

    async fn get_task(&self, id: &TaskId) -> Result<Task, TaskError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id.to_string()))
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, TaskError> {
        self.repository.list_all().await
    }

    async fn list_tasks_by_owner(&self, owner: &UserId) -> Result<Vec<Task>, TaskError> {
        self.repository.list_by_owner(owner).await
    }

    async fn update_task(
        &self,
        id: &TaskId,
        command: UpdateTaskCommand,
    ) -> Result<Task, TaskError> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id.to_string()))?;

        if let Some(new_title) = command.title {
            task.title = new_title;
        }

        if let Some(new_description) = command.description {
            task.description = new_description;
        }

        if let Some(new_due_date) = command.due_date {
            task.due_date = Some(new_due_date);
        }

        if let Some(new_status) = command.status {
            task.status = new_status;
        }

        let affected = self.repository.update(&task).await?;
        if affected == 0 {
            // The task was found above, so a zero-row update means it vanished
            // between the two statements.
            return Err(TaskError::UpdateFailed(id.to_string()));
        }

        Ok(task)
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), TaskError> {
        // Existence is checked first so a missing task maps to not-found
        // rather than a zero-row delete.
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(TaskError::NotFound(id.to_string()));
        }

        let affected = self.repository.delete(id).await?;
        if affected == 0 {
            return Err(TaskError::DeleteFailed(id.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::task::models::TaskTitle;

    mock! {
        pub TestTaskRepository {}

        #[async_trait]
        impl TaskRepository for TestTaskRepository {
            async fn create(&self, task: Task) -> Result<Task, TaskError>;
            async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, TaskError>;
            async fn list_all(&self) -> Result<Vec<Task>, TaskError>;
            async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Task>, TaskError>;
            async fn update(&self, task: &Task) -> Result<u64, TaskError>;
            async fn delete(&self, id: &TaskId) -> Result<u64, TaskError>;
        }
    }

    fn sample_task(title: &str, owner: UserId) -> Task {
        Task {
            id: TaskId::new(),
            title: TaskTitle::new(title.to_string()).unwrap(),
            description: "Ir al supermercado".to_string(),
            due_date: NaiveDate::from_ymd_opt(2025, 9, 15),
            status: TaskStatus::Pending,
            owner,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_task_starts_pending() {
        let mut repository = MockTestTaskRepository::new();

        let owner = UserId::new();
        repository
            .expect_create()
            .withf(move |task| {
                task.title.as_str() == "Comprar leche"
                    && task.status == TaskStatus::Pending
                    && task.owner == owner
            })
            .times(1)
            .returning(|task| Ok(task));

        let service = TaskService::new(Arc::new(repository));

        let command = CreateTaskCommand::new(
            TaskTitle::new("Comprar leche".to_string()).unwrap(),
            "Ir al supermercado".to_string(),
            NaiveDate::from_ymd_opt(2025, 9, 15),
            owner,
        );

        let result = service.create_task(command).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().status, TaskStatus::Pending);
    }

    #[tokio::test]
    async fn test_get_task_not_found() {
        let mut repository = MockTestTaskRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = TaskService::new(Arc::new(repository));

        let result = service.get_task(&TaskId::new()).await;
        assert!(matches!(result.unwrap_err(), TaskError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_tasks_by_owner() {
        let mut repository = MockTestTaskRepository::new();

        let owner = UserId::new();
        repository
            .expect_list_by_owner()
            .withf(move |id| *id == owner)
            .times(1)
            .returning(move |id| Ok(vec![sample_task("Comprar leche", *id)]));

        let service = TaskService::new(Arc::new(repository));

        let result = service.list_tasks_by_owner(&owner).await;
        assert!(result.is_ok());

        let tasks = result.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].owner, owner);
    }

    #[tokio::test]
    async fn test_update_task_partial_fields() {
        let mut repository = MockTestTaskRepository::new();

        let existing = sample_task("Comprar leche", UserId::new());
        let task_id = existing.id;

        let returned = existing.clone();
        repository
            .expect_find_by_id()
            .withf(move |id| *id == task_id)
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        repository
            .expect_update()
            .withf(|task| {
                // Untouched fields keep their stored values.
                task.title.as_str() == "Comprar huevos"
                    && task.description == "Ir al supermercado"
                    && task.status == TaskStatus::Completed
            })
            .times(1)
            .returning(|_| Ok(1));

        let service = TaskService::new(Arc::new(repository));

        let command = UpdateTaskCommand {
            title: Some(TaskTitle::new("Comprar huevos".to_string()).unwrap()),
            description: None,
            due_date: None,
            status: Some(TaskStatus::Completed),
        };

        let result = service.update_task(&task_id, command).await;
        assert!(result.is_ok());

        let updated = result.unwrap();
        assert_eq!(updated.title.as_str(), "Comprar huevos");
        assert_eq!(updated.status, TaskStatus::Completed);
    }

    #[tokio::test]
    async fn test_update_task_not_found() {
        let mut repository = MockTestTaskRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = TaskService::new(Arc::new(repository));

        let command = UpdateTaskCommand {
            title: None,
            description: None,
            due_date: None,
            status: Some(TaskStatus::Completed),
        };

        let result = service.update_task(&TaskId::new(), command).await;
        assert!(matches!(result.unwrap_err(), TaskError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_task_zero_rows() {
        let mut repository = MockTestTaskRepository::new();

        let existing = sample_task("Comprar leche", UserId::new());
        let task_id = existing.id;

        let returned = existing.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        repository.expect_update().times(1).returning(|_| Ok(0));

        let service = TaskService::new(Arc::new(repository));

        let command = UpdateTaskCommand {
            title: None,
            description: None,
            due_date: None,
            status: Some(TaskStatus::Completed),
        };

        let result = service.update_task(&task_id, command).await;
        assert!(matches!(result.unwrap_err(), TaskError::UpdateFailed(_)));
    }

    #[tokio::test]
    async fn test_delete_task_success() {
        let mut repository = MockTestTaskRepository::new();

        let existing = sample_task("Comprar leche", UserId::new());
        let task_id = existing.id;

        let returned = existing.clone();
        repository
            .expect_find_by_id()
            .withf(move |id| *id == task_id)
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        repository
            .expect_delete()
            .withf(move |id| *id == task_id)
            .times(1)
            .returning(|_| Ok(1));

        let service = TaskService::new(Arc::new(repository));

        let result = service.delete_task(&task_id).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_task_not_found() {
        let mut repository = MockTestTaskRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        repository.expect_delete().times(0);

        let service = TaskService::new(Arc::new(repository));

        let result = service.delete_task(&TaskId::new()).await;
        assert!(matches!(result.unwrap_err(), TaskError::NotFound(_)));
    }
}
