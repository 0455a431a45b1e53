//! Domain model for projects, tasks, and the commands that mutate them.
//!
//! The domain holds validated value types, the project aggregate, and the
//! pure grouping logic used by read-only views. Storage and presentation
//! stay outside the domain boundary.

mod agenda;
mod command;
mod deadline;
mod error;
mod ids;
mod project;
mod task;

pub use agenda::{DeadlineGroup, ProjectGroup, group_by_deadline, group_by_project};
pub use command::{Command, CommandPayload, CommandResult};
pub use deadline::DeadlinePolicy;
pub use error::{ErrorKind, TaskDomainError};
pub use ids::{ProjectId, TaskId};
pub use project::{Project, ProjectName};
pub use task::{Task, TaskChange, TaskDescription};
