//! JSON request and response bodies.

use crate::task::domain::{DeadlineGroup, Project, ProjectGroup, Task};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/projects`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectRequest {
    /// Name of the new project.
    pub name: String,
}

/// Body of `POST /api/projects/{id}/tasks`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    /// Task description.
    pub description: String,
    /// Optional deadline as `YYYY-MM-DD` or an RFC 3339 timestamp.
    #[serde(default)]
    pub deadline: Option<String>,
}

/// Query of `PUT .../check`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CheckQuery {
    /// New completion flag.
    pub checked: bool,
}

/// Query of `PUT .../deadline`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeadlineQuery {
    /// New deadline as `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub deadline: String,
}

/// Query of `GET /api/tasks`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TasksQuery {
    /// Deadline to match; absent selects tasks without a deadline.
    #[serde(default)]
    pub deadline: Option<String>,
}

/// Parses a deadline given as a calendar date or an RFC 3339 timestamp.
///
/// Only the date part of a timestamp is kept.
///
/// # Errors
///
/// Returns a message naming the rejected text.
pub fn parse_deadline(text: &str) -> Result<NaiveDate, String> {
    let trimmed = text.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|stamp| stamp.date_naive()))
        .map_err(|_| format!("invalid deadline '{trimmed}'; expected YYYY-MM-DD"))
}

/// A task as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDto {
    /// Task identifier.
    pub id: u64,
    /// Task description.
    pub description: String,
    /// Completion flag.
    pub done: bool,
    /// Deadline, if set.
    pub deadline: Option<NaiveDate>,
    /// Owning project identifier.
    pub project_id: u64,
    /// Owning project name.
    pub project_name: String,
}

impl From<&Task> for TaskDto {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            description: task.description().to_string(),
            done: task.is_done(),
            deadline: task.deadline(),
            project_id: task.project_id().value(),
            project_name: task.project_name().to_string(),
        }
    }
}

/// A project with its tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDto {
    /// Project identifier.
    pub id: u64,
    /// Project name.
    pub name: String,
    /// Tasks in creation order.
    pub tasks: Vec<TaskDto>,
}

impl From<&Project> for ProjectDto {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().value(),
            name: project.name().to_string(),
            tasks: project.tasks().iter().map(TaskDto::from).collect(),
        }
    }
}

/// Tasks of one project inside a grouped view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectGroupDto {
    /// Project name.
    pub project_name: String,
    /// Tasks ordered by identifier.
    pub tasks: Vec<TaskDto>,
}

impl From<&ProjectGroup> for ProjectGroupDto {
    fn from(group: &ProjectGroup) -> Self {
        Self {
            project_name: group.project_name().to_string(),
            tasks: group.tasks().iter().map(TaskDto::from).collect(),
        }
    }
}

/// Tasks sharing one deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineGroupDto {
    /// Shared deadline; `None` for tasks without one.
    pub deadline: Option<NaiveDate>,
    /// Project groups ordered by name.
    pub projects: Vec<ProjectGroupDto>,
}

impl From<&DeadlineGroup> for DeadlineGroupDto {
    fn from(group: &DeadlineGroup) -> Self {
        Self {
            deadline: group.deadline(),
            projects: group.projects().iter().map(ProjectGroupDto::from).collect(),
        }
    }
}
