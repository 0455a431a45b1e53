//! Task entity and related value types.

use super::{ProjectId, ProjectName, TaskDomainError, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a task description in characters.
const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Validated, non-empty free-text task description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Creates a validated description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskDescription`] when the value is
    /// empty after trimming, or [`TaskDomainError::TaskDescriptionTooLong`]
    /// when it exceeds 500 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTaskDescription);
        }

        if normalized.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Err(TaskDomainError::TaskDescriptionTooLong {
                max: MAX_DESCRIPTION_LENGTH,
            });
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the description as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A mutation applied to a single task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskChange {
    /// Marks the task done (`true`) or not done (`false`).
    Done(bool),
    /// Replaces the task deadline.
    Deadline(NaiveDate),
}

/// A unit of work owned by exactly one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    description: TaskDescription,
    done: bool,
    deadline: Option<NaiveDate>,
    project_id: ProjectId,
    project_name: ProjectName,
}

impl Task {
    /// Creates an open task without a deadline.
    pub(super) const fn new(
        id: TaskId,
        description: TaskDescription,
        project_id: ProjectId,
        project_name: ProjectName,
    ) -> Self {
        Self {
            id,
            description,
            done: false,
            deadline: None,
            project_id,
            project_name,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns whether the task has been checked off.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Returns the deadline, if one has been set.
    #[must_use]
    pub const fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    /// Returns the owning project's identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the owning project's name, retained for display.
    #[must_use]
    pub const fn project_name(&self) -> &ProjectName {
        &self.project_name
    }

    /// Returns `true` when the deadline falls on `date`.
    #[must_use]
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.deadline == Some(date)
    }

    /// Applies a change to this task.
    pub fn apply(&mut self, change: TaskChange) {
        match change {
            TaskChange::Done(done) => self.done = done,
            TaskChange::Deadline(deadline) => self.deadline = Some(deadline),
        }
    }
}
