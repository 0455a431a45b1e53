//! Project aggregate and its validated name.

use super::{ProjectId, Task, TaskChange, TaskDescription, TaskDomainError, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a project name in characters.
const MAX_NAME_LENGTH: usize = 100;

/// Validated project name.
///
/// Names are trimmed on construction and compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Creates a validated project name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyProjectName`] when the value is empty
    /// after trimming, [`TaskDomainError::ProjectNameTooLong`] when it
    /// exceeds 100 characters, or
    /// [`TaskDomainError::InvalidProjectNameCharacters`] when it holds
    /// anything but ASCII letters, digits, whitespace, `-` and `_`.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyProjectName);
        }

        if normalized.chars().count() > MAX_NAME_LENGTH {
            return Err(TaskDomainError::ProjectNameTooLong {
                name: raw,
                max: MAX_NAME_LENGTH,
            });
        }

        let allowed =
            |c: char| c.is_ascii_alphanumeric() || c.is_whitespace() || matches!(c, '-' | '_');
        if !normalized.chars().all(allowed) {
            return Err(TaskDomainError::InvalidProjectNameCharacters(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named container owning an ordered list of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: ProjectName,
    tasks: Vec<Task>,
}

impl Project {
    /// Creates an empty project.
    #[must_use]
    pub const fn new(id: ProjectId, name: ProjectName) -> Self {
        Self {
            id,
            name,
            tasks: Vec::new(),
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the tasks in creation order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a new open task to this project and returns a copy of it.
    ///
    /// The caller is responsible for supplying a fresh identifier.
    pub fn open_task(&mut self, id: TaskId, description: TaskDescription) -> Task {
        self.open_task_due(id, description, None)
    }

    /// Appends a new open task that already carries `deadline`.
    pub fn open_task_due(
        &mut self,
        id: TaskId,
        description: TaskDescription,
        deadline: Option<NaiveDate>,
    ) -> Task {
        let mut task = Task::new(id, description, self.id, self.name.clone());
        if let Some(due) = deadline {
            task.apply(TaskChange::Deadline(due));
        }
        self.tasks.push(task.clone());
        task
    }

    /// Returns the task with the given identifier, if it belongs here.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns a mutable reference to the task with the given identifier.
    pub fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    /// Returns tasks whose deadline equals `deadline`; `None` selects tasks
    /// without a deadline.
    pub fn tasks_with_deadline(&self, deadline: Option<NaiveDate>) -> impl Iterator<Item = &Task> {
        self.tasks
            .iter()
            .filter(move |task| task.deadline() == deadline)
    }
}
