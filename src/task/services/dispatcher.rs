//! Routes mutating commands to the task service.

use super::TaskService;
use crate::task::{
    domain::{Command, CommandPayload, CommandResult, ErrorKind},
    ports::TaskStore,
};
use mockable::Clock;
use serde_json::Value;
use tracing::{debug, warn};

/// Executes [`Command`] values and reports a uniform [`CommandResult`].
///
/// Every service error becomes a failed result carrying the error message;
/// nothing raised by a handler escapes the dispatcher.
pub struct CommandDispatcher<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    service: TaskService<S, C>,
}

impl<S, C> Clone for CommandDispatcher<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

impl<S, C> CommandDispatcher<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a dispatcher over the given service.
    #[must_use]
    pub const fn new(service: TaskService<S, C>) -> Self {
        Self { service }
    }

    /// Returns the underlying service.
    #[must_use]
    pub const fn service(&self) -> &TaskService<S, C> {
        &self.service
    }

    /// Executes a command.
    ///
    /// Add commands return the created entity as data; check and deadline
    /// commands succeed without data.
    pub async fn dispatch(&self, command: Command) -> CommandResult {
        let tag = command.tag();
        let outcome = match command {
            Command::AddProject { name } => self
                .service
                .add_project(&name)
                .await
                .map(|project| CommandResult::with_data(CommandPayload::Project(project))),
            Command::AddTask {
                project_id,
                description,
            } => self
                .service
                .add_task(project_id, &description)
                .await
                .map(|task| CommandResult::with_data(CommandPayload::Task(task))),
            Command::CheckTask { task_id, checked } => self
                .service
                .check_task(task_id, checked)
                .await
                .map(|_| CommandResult::succeeded()),
            Command::SetDeadline { task_id, deadline } => self
                .service
                .set_deadline(task_id, deadline)
                .await
                .map(|_| CommandResult::succeeded()),
        };

        outcome.unwrap_or_else(|err| {
            warn!(command = tag, error = %err, "command rejected");
            CommandResult::failed(err.kind(), err.to_string())
        })
    }

    /// Executes a serialized command of the form `{"type": "<Tag>", ...}`.
    ///
    /// Tags outside the known command set yield
    /// `Unknown command type: <Tag>`.
    pub async fn dispatch_value(&self, value: Value) -> CommandResult {
        let Some(tag) = value.get("type").and_then(Value::as_str).map(str::to_owned) else {
            return CommandResult::failed(
                ErrorKind::Validation,
                "command is missing a string 'type' field",
            );
        };

        if !Command::is_known_tag(&tag) {
            warn!(command = %tag, "unknown command type");
            return CommandResult::failed(
                ErrorKind::Validation,
                format!("Unknown command type: {tag}"),
            );
        }

        match serde_json::from_value::<Command>(value) {
            Ok(command) => {
                debug!(command = %tag, "dispatching serialized command");
                self.dispatch(command).await
            }
            Err(err) => CommandResult::failed(
                ErrorKind::Validation,
                format!("invalid arguments for {tag}: {err}"),
            ),
        }
    }
}
