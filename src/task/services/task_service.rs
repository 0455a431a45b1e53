//! Service layer for project and task management.

use crate::task::{
    domain::{
        DeadlineGroup, DeadlinePolicy, ErrorKind, Project, ProjectGroup, ProjectId, ProjectName,
        Task, TaskChange, TaskDescription, TaskDomainError, TaskId, group_by_deadline,
        group_by_project,
    },
    ports::{TaskStore, TaskStoreError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for project and task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),

    /// No project has the requested identifier.
    #[error("Project with ID {0} not found.")]
    ProjectNotFound(ProjectId),

    /// No project has the requested name.
    #[error("Project '{0}' not found.")]
    ProjectNameNotFound(ProjectName),

    /// No task has the requested identifier.
    #[error("Task with ID {0} not found.")]
    TaskNotFound(TaskId),

    /// The task exists but belongs to another project.
    #[error("Task with ID {task_id} not found in project {project_id}")]
    TaskNotInProject {
        /// Requested project.
        project_id: ProjectId,
        /// Requested task.
        task_id: TaskId,
    },

    /// The deadline policy rejected a date before today.
    #[error("Deadline cannot be in the past")]
    DeadlineInPast {
        /// Rejected deadline.
        deadline: NaiveDate,
        /// Current date when the call was made.
        today: NaiveDate,
    },
}

impl TaskServiceError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) | Self::DeadlineInPast { .. } => ErrorKind::Validation,
            Self::Store(TaskStoreError::DuplicateProjectName(_)) => ErrorKind::AlreadyExists,
            Self::Store(TaskStoreError::ProjectNotFound(_) | TaskStoreError::TaskNotFound(_))
            | Self::ProjectNotFound(_)
            | Self::ProjectNameNotFound(_)
            | Self::TaskNotFound(_)
            | Self::TaskNotInProject { .. } => ErrorKind::NotFound,
            Self::Store(
                TaskStoreError::IdentifiersExhausted(_) | TaskStoreError::Persistence(_),
            ) => ErrorKind::Internal,
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Public operations over projects and tasks.
///
/// Every mutating operation validates its input before touching the store,
/// so a failed call leaves the state unchanged.
pub struct TaskService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    deadline_policy: DeadlinePolicy,
}

impl<S, C> Clone for TaskService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            deadline_policy: self.deadline_policy,
        }
    }
}

impl<S, C> TaskService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a service that accepts any deadline.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            clock,
            deadline_policy: DeadlinePolicy::Unrestricted,
        }
    }

    /// Sets the policy applied by [`Self::set_deadline`].
    #[must_use]
    pub const fn with_deadline_policy(mut self, policy: DeadlinePolicy) -> Self {
        self.deadline_policy = policy;
        self
    }

    /// Returns the active deadline policy.
    #[must_use]
    pub const fn deadline_policy(&self) -> DeadlinePolicy {
        self.deadline_policy
    }

    /// Returns the current local date according to the service clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }

    /// Creates a project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the name is invalid, or
    /// [`TaskStoreError::DuplicateProjectName`] when it is already taken.
    pub async fn add_project(&self, name: &str) -> TaskServiceResult<Project> {
        let project_name = ProjectName::new(name)?;
        let project = self.store.create_project(project_name).await?;
        info!(project_id = %project.id(), name = %project.name(), "project created");
        Ok(project)
    }

    /// Appends a task to a project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the description is invalid,
    /// or [`TaskStoreError::ProjectNotFound`] when the project is absent.
    pub async fn add_task(
        &self,
        project_id: ProjectId,
        description: &str,
    ) -> TaskServiceResult<Task> {
        self.add_task_with_deadline(project_id, description, None).await
    }

    /// Appends a task and optionally gives it a deadline.
    ///
    /// The description and the deadline policy are both checked before the
    /// task is created, and the task is stored with its deadline in one step.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::add_task`], or
    /// [`TaskServiceError::DeadlineInPast`] when the policy rejects the date.
    pub async fn add_task_with_deadline(
        &self,
        project_id: ProjectId,
        description: &str,
        deadline: Option<NaiveDate>,
    ) -> TaskServiceResult<Task> {
        if let Some(due) = deadline {
            self.ensure_admitted(due)?;
        }
        let task_description = TaskDescription::new(description)?;
        let task = self
            .store
            .create_task(project_id, task_description, deadline)
            .await?;
        info!(task_id = %task.id(), project_id = %project_id, ?deadline, "task created");
        Ok(task)
    }

    /// Marks a task done (`checked == true`) or not done.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::TaskNotFound`] when no task has the id.
    pub async fn check_task(&self, task_id: TaskId, checked: bool) -> TaskServiceResult<Task> {
        let task = self
            .store
            .update_task(task_id, TaskChange::Done(checked))
            .await?;
        debug!(task_id = %task_id, checked, "task completion updated");
        Ok(task)
    }

    /// Replaces the deadline of a task.
    ///
    /// The deadline policy is checked before the task is looked up.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::DeadlineInPast`] when the policy rejects
    /// the date, or [`TaskStoreError::TaskNotFound`] when no task has the id.
    pub async fn set_deadline(
        &self,
        task_id: TaskId,
        deadline: NaiveDate,
    ) -> TaskServiceResult<Task> {
        self.ensure_admitted(deadline)?;
        let task = self
            .store
            .update_task(task_id, TaskChange::Deadline(deadline))
            .await?;
        debug!(task_id = %task_id, %deadline, "task deadline updated");
        Ok(task)
    }

    fn ensure_admitted(&self, deadline: NaiveDate) -> TaskServiceResult<()> {
        let today = self.today();
        if self.deadline_policy.admits(deadline, today) {
            Ok(())
        } else {
            Err(TaskServiceError::DeadlineInPast { deadline, today })
        }
    }

    /// Returns a project by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::ProjectNotFound`] when it does not exist.
    pub async fn get_project(&self, id: ProjectId) -> TaskServiceResult<Project> {
        self.store
            .find_project(id)
            .await?
            .ok_or(TaskServiceError::ProjectNotFound(id))
    }

    /// Returns a project by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the name is invalid, or
    /// [`TaskServiceError::ProjectNameNotFound`] when no project has it.
    pub async fn get_project_by_name(&self, name: &str) -> TaskServiceResult<Project> {
        let project_name = ProjectName::new(name)?;
        let found = self.store.find_project_by_name(&project_name).await?;
        found.ok_or(TaskServiceError::ProjectNameNotFound(project_name))
    }

    /// Returns a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when it does not exist.
    pub async fn get_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.store
            .find_task(id)
            .await?
            .ok_or(TaskServiceError::TaskNotFound(id))
    }

    /// Returns a task only if it belongs to the given project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::ProjectNotFound`] when the project does not
    /// exist, or [`TaskServiceError::TaskNotInProject`] when the project has
    /// no such task.
    pub async fn get_task_in_project(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> TaskServiceResult<Task> {
        let project = self.get_project(project_id).await?;
        project
            .task(task_id)
            .cloned()
            .ok_or(TaskServiceError::TaskNotInProject {
                project_id,
                task_id,
            })
    }

    /// Returns all projects with their tasks, in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Store`] when the store read fails.
    pub async fn all_projects(&self) -> TaskServiceResult<Vec<Project>> {
        Ok(self.store.list_projects().await?)
    }

    /// Returns every task across all projects.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Store`] when the store read fails.
    pub async fn list_all_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.store.list_tasks().await?)
    }

    /// Returns the tasks whose deadline is the current date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Store`] when the store read fails.
    pub async fn tasks_for_today(&self) -> TaskServiceResult<Vec<Task>> {
        let today = self.today();
        let tasks: Vec<Task> = self
            .list_all_tasks()
            .await?
            .into_iter()
            .filter(|task| task.is_due_on(today))
            .collect();
        debug!(%today, count = tasks.len(), "tasks due today");
        Ok(tasks)
    }

    /// Returns the tasks whose deadline equals `deadline`; `None` selects
    /// tasks without a deadline.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Store`] when the store read fails.
    pub async fn tasks_by_deadline(
        &self,
        deadline: Option<NaiveDate>,
    ) -> TaskServiceResult<Vec<Task>> {
        Ok(self
            .list_all_tasks()
            .await?
            .into_iter()
            .filter(|task| task.deadline() == deadline)
            .collect())
    }

    /// Returns today's tasks grouped by project name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Store`] when the store read fails.
    pub async fn today_by_project(&self) -> TaskServiceResult<Vec<ProjectGroup>> {
        Ok(group_by_project(self.tasks_for_today().await?))
    }

    /// Returns all tasks grouped by deadline, then by project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Store`] when the store read fails.
    pub async fn view_by_deadline(&self) -> TaskServiceResult<Vec<DeadlineGroup>> {
        let projects = self.all_projects().await?;
        Ok(group_by_deadline(&projects))
    }
}
