//! Application services for project and task management.

mod dispatcher;
mod task_service;

pub use dispatcher::CommandDispatcher;
pub use crate::task::domain::ErrorKind;
pub use task_service::{TaskService, TaskServiceError, TaskServiceResult};
