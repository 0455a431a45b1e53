//! Thread-safe in-memory task store.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::allocator::IdAllocator;
use crate::task::{
    domain::{Project, ProjectId, ProjectName, Task, TaskChange, TaskDescription, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// In-memory store holding all projects for the lifetime of the process.
///
/// A single `RwLock` guards the entities, the name and task indexes, and the
/// identifier counters, so every mutation is atomic and every read sees a
/// consistent snapshot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    ids: IdAllocator,
    // Keyed by sequential id, so iteration order is creation order.
    projects: BTreeMap<ProjectId, Project>,
    name_index: HashMap<ProjectName, ProjectId>,
    task_index: HashMap<TaskId, ProjectId>,
}

impl InMemoryTaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskStoreResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskStoreResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

impl InMemoryTaskState {
    fn task(&self, id: TaskId) -> Option<&Task> {
        self.task_index
            .get(&id)
            .and_then(|project_id| self.projects.get(project_id))
            .and_then(|project| project.task(id))
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn create_project(&self, name: ProjectName) -> TaskStoreResult<Project> {
        let mut state = self.write()?;
        if state.name_index.contains_key(&name) {
            return Err(TaskStoreError::DuplicateProjectName(name));
        }

        let id = state.ids.next_project_id()?;
        let project = Project::new(id, name);
        state.name_index.insert(project.name().clone(), id);
        state.projects.insert(id, project.clone());
        Ok(project)
    }

    async fn create_task(
        &self,
        project_id: ProjectId,
        description: TaskDescription,
        deadline: Option<NaiveDate>,
    ) -> TaskStoreResult<Task> {
        let mut state = self.write()?;
        if !state.projects.contains_key(&project_id) {
            return Err(TaskStoreError::ProjectNotFound(project_id));
        }

        let task_id = state.ids.next_task_id()?;
        let project = state
            .projects
            .get_mut(&project_id)
            .ok_or(TaskStoreError::ProjectNotFound(project_id))?;
        let task = project.open_task_due(task_id, description, deadline);
        state.task_index.insert(task_id, project_id);
        Ok(task)
    }

    async fn update_task(&self, task_id: TaskId, change: TaskChange) -> TaskStoreResult<Task> {
        let mut state = self.write()?;
        let project_id = *state
            .task_index
            .get(&task_id)
            .ok_or(TaskStoreError::TaskNotFound(task_id))?;
        let task = state
            .projects
            .get_mut(&project_id)
            .and_then(|project| project.task_mut(task_id))
            .ok_or(TaskStoreError::TaskNotFound(task_id))?;
        task.apply(change);
        Ok(task.clone())
    }

    async fn find_project(&self, id: ProjectId) -> TaskStoreResult<Option<Project>> {
        let state = self.read()?;
        Ok(state.projects.get(&id).cloned())
    }

    async fn find_project_by_name(&self, name: &ProjectName) -> TaskStoreResult<Option<Project>> {
        let state = self.read()?;
        let project = state
            .name_index
            .get(name)
            .and_then(|id| state.projects.get(id))
            .cloned();
        Ok(project)
    }

    async fn find_task(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.task(id).cloned())
    }

    async fn list_projects(&self) -> TaskStoreResult<Vec<Project>> {
        let state = self.read()?;
        Ok(state.projects.values().cloned().collect())
    }

    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state
            .projects
            .values()
            .flat_map(|project| project.tasks().iter().cloned())
            .collect())
    }
}
