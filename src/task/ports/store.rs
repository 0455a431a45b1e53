//! Store port owning every project and task.

use crate::task::domain::{
    Project, ProjectId, ProjectName, Task, TaskChange, TaskDescription, TaskId,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Project and task storage contract.
///
/// Implementations allocate identifiers themselves and must apply each
/// mutating call atomically: two concurrent `create_project` calls with the
/// same name never both succeed, and concurrent task appends are never lost.
/// Readers always observe fully initialized entities.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Creates a project with a freshly allocated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateProjectName`] when a project with
    /// the same name exists.
    async fn create_project(&self, name: ProjectName) -> TaskStoreResult<Project>;

    /// Appends a task with a freshly allocated identifier to a project.
    ///
    /// The deadline, when given, is set before the task becomes visible.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::ProjectNotFound`] when the project does not
    /// exist.
    async fn create_task(
        &self,
        project_id: ProjectId,
        description: TaskDescription,
        deadline: Option<NaiveDate>,
    ) -> TaskStoreResult<Task>;

    /// Applies a change to an existing task and returns the updated task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::TaskNotFound`] when no project owns the task.
    async fn update_task(&self, task_id: TaskId, change: TaskChange) -> TaskStoreResult<Task>;

    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    async fn find_project(&self, id: ProjectId) -> TaskStoreResult<Option<Project>>;

    /// Finds a project by exact name.
    ///
    /// Returns `None` when no project has the name.
    async fn find_project_by_name(&self, name: &ProjectName) -> TaskStoreResult<Option<Project>>;

    /// Finds a task by identifier across all projects.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_task(&self, id: TaskId) -> TaskStoreResult<Option<Task>>;

    /// Returns every project, with its tasks, in creation order.
    async fn list_projects(&self) -> TaskStoreResult<Vec<Project>>;

    /// Returns every task, grouped by project in creation order.
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// A project with the same name already exists.
    #[error("Project '{0}' already exists.")]
    DuplicateProjectName(ProjectName),

    /// The project was not found.
    #[error("Project with ID {0} not found.")]
    ProjectNotFound(ProjectId),

    /// The task was not found.
    #[error("Task with ID {0} not found.")]
    TaskNotFound(TaskId),

    /// An identifier sequence has no values left.
    #[error("{0} identifier sequence exhausted")]
    IdentifiersExhausted(&'static str),

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a storage-layer error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
