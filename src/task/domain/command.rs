//! Mutating commands and their uniform results.

use super::{ErrorKind, Project, ProjectId, Task, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A structured request to mutate project and task state.
///
/// Serialized commands carry their variant name in a `type` field, for
/// example `{"type": "CheckTask", "task_id": 3, "checked": true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Creates a project with the given name.
    AddProject {
        /// Name of the new project.
        name: String,
    },
    /// Appends a task to an existing project.
    AddTask {
        /// Owning project.
        project_id: ProjectId,
        /// Free-text description.
        description: String,
    },
    /// Marks a task done or not done.
    CheckTask {
        /// Task to update.
        task_id: TaskId,
        /// New completion flag.
        checked: bool,
    },
    /// Sets a task deadline.
    SetDeadline {
        /// Task to update.
        task_id: TaskId,
        /// New deadline.
        deadline: NaiveDate,
    },
}

impl Command {
    /// Serialized tags of every command variant.
    pub const TAGS: [&'static str; 4] = ["AddProject", "AddTask", "CheckTask", "SetDeadline"];

    /// Returns the serialized tag of this command.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::AddProject { .. } => "AddProject",
            Self::AddTask { .. } => "AddTask",
            Self::CheckTask { .. } => "CheckTask",
            Self::SetDeadline { .. } => "SetDeadline",
        }
    }

    /// Returns `true` when `tag` names a known command variant.
    #[must_use]
    pub fn is_known_tag(tag: &str) -> bool {
        Self::TAGS.contains(&tag)
    }
}

/// Value produced by a successful command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CommandPayload {
    /// A newly created project.
    Project(Project),
    /// A newly created task.
    Task(Task),
}

/// Uniform outcome of dispatching a [`Command`].
///
/// `error` is present only on failure; `data` only on success of a command
/// that creates an entity. The failure kind stays in process and is never
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<CommandPayload>,
    #[serde(skip)]
    kind: Option<ErrorKind>,
}

impl CommandResult {
    /// Successful result without a payload.
    #[must_use]
    pub const fn succeeded() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
            kind: None,
        }
    }

    /// Successful result carrying a payload.
    #[must_use]
    pub const fn with_data(data: CommandPayload) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
            kind: None,
        }
    }

    /// Failed result of the given kind with a message.
    #[must_use]
    pub fn failed(kind: ErrorKind, error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            data: None,
            kind: Some(kind),
        }
    }

    /// Returns whether the command succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Returns the failure message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the failure kind, if the command failed.
    #[must_use]
    pub const fn error_kind(&self) -> Option<ErrorKind> {
        self.kind
    }

    /// Returns the success payload, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&CommandPayload> {
        self.data.as_ref()
    }

    /// Consumes the result and returns its payload.
    #[must_use]
    pub fn into_data(self) -> Option<CommandPayload> {
        self.data
    }
}
