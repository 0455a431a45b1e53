//! Read-only views that reorganize tasks by deadline and by project.
//!
//! Ordering rules:
//!
//! - deadline groups ascend by date, and the group of tasks without a
//!   deadline always comes last;
//! - project groups inside a deadline group ascend by project name;
//! - tasks inside a project group ascend by identifier, which is creation
//!   order because identifiers are allocated monotonically.

use super::{Project, ProjectName, Task};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tasks of one project inside a grouped view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectGroup {
    project_name: ProjectName,
    tasks: Vec<Task>,
}

impl ProjectGroup {
    /// Returns the project name shared by every task in the group.
    #[must_use]
    pub const fn project_name(&self) -> &ProjectName {
        &self.project_name
    }

    /// Returns the tasks in ascending identifier order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

/// Tasks sharing one deadline (or sharing the absence of one).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineGroup {
    deadline: Option<NaiveDate>,
    projects: Vec<ProjectGroup>,
}

impl DeadlineGroup {
    /// Returns the shared deadline; `None` for tasks without one.
    #[must_use]
    pub const fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    /// Returns the project sub-groups in ascending name order.
    #[must_use]
    pub fn projects(&self) -> &[ProjectGroup] {
        &self.projects
    }
}

/// Sort key placing dated groups before the undated one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum DeadlineKey {
    Dated(NaiveDate),
    Undated,
}

impl From<Option<NaiveDate>> for DeadlineKey {
    fn from(deadline: Option<NaiveDate>) -> Self {
        deadline.map_or(Self::Undated, Self::Dated)
    }
}

impl From<DeadlineKey> for Option<NaiveDate> {
    fn from(key: DeadlineKey) -> Self {
        match key {
            DeadlineKey::Dated(date) => Some(date),
            DeadlineKey::Undated => None,
        }
    }
}

type ProjectBuckets = BTreeMap<ProjectName, Vec<Task>>;

/// Groups every task of `projects` by deadline, then by project name.
#[must_use]
pub fn group_by_deadline<'a>(projects: impl IntoIterator<Item = &'a Project>) -> Vec<DeadlineGroup> {
    let mut buckets: BTreeMap<DeadlineKey, ProjectBuckets> = BTreeMap::new();
    for project in projects {
        for task in project.tasks() {
            buckets
                .entry(DeadlineKey::from(task.deadline()))
                .or_default()
                .entry(project.name().clone())
                .or_default()
                .push(task.clone());
        }
    }

    buckets
        .into_iter()
        .map(|(key, by_project)| DeadlineGroup {
            deadline: key.into(),
            projects: into_project_groups(by_project),
        })
        .collect()
}

/// Groups `tasks` by their project name.
#[must_use]
pub fn group_by_project(tasks: impl IntoIterator<Item = Task>) -> Vec<ProjectGroup> {
    let mut buckets = ProjectBuckets::new();
    for task in tasks {
        buckets
            .entry(task.project_name().clone())
            .or_default()
            .push(task);
    }
    into_project_groups(buckets)
}

fn into_project_groups(buckets: ProjectBuckets) -> Vec<ProjectGroup> {
    buckets
        .into_iter()
        .map(|(project_name, mut tasks)| {
            tasks.sort_by_key(Task::id);
            ProjectGroup {
                project_name,
                tasks,
            }
        })
        .collect()
}
