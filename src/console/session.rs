//! Interactive read-eval-print loop over the command dispatcher.

use super::parser::{ConsoleCommand, parse};
use super::render::{DeadlineListing, HELP, ProjectListing, TodayListing};
use crate::task::{
    domain::Command,
    ports::TaskStore,
    services::{CommandDispatcher, TaskService, TaskServiceResult},
};
use mockable::Clock;
use std::fmt;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

/// Greeting printed when a session starts.
pub const WELCOME: &str = "Welcome to TaskList! Type 'help' for available commands.";

const PROMPT: &str = "> ";

/// What the session prints in response to one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to print, possibly empty.
    Output(String),
    /// The user asked to leave.
    Quit,
}

impl Reply {
    fn line(message: impl fmt::Display) -> Self {
        Self::Output(format!("{message}\n"))
    }

    const fn silent() -> Self {
        Self::Output(String::new())
    }
}

/// A console session bound to one dispatcher.
///
/// Mutating commands go through [`CommandDispatcher::dispatch`]; views are
/// read straight from the [`TaskService`].
pub struct ConsoleSession<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    dispatcher: CommandDispatcher<S, C>,
}

impl<S, C> ConsoleSession<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a session over the given dispatcher.
    #[must_use]
    pub const fn new(dispatcher: CommandDispatcher<S, C>) -> Self {
        Self { dispatcher }
    }

    const fn service(&self) -> &TaskService<S, C> {
        self.dispatcher.service()
    }

    /// Runs the loop until `quit` or end of input.
    ///
    /// Blank lines are ignored. Failures are printed and the loop continues.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while reading `input` or writing
    /// `output`.
    pub async fn run<R, W>(&self, input: R, mut output: W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        output.write_all(format!("{WELCOME}\n").as_bytes()).await?;
        let mut lines = input.lines();
        loop {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match self.execute(&line).await {
                Reply::Quit => break,
                Reply::Output(text) => output.write_all(text.as_bytes()).await?,
            }
        }
        output.flush().await
    }

    /// Executes a single console line and returns what to print.
    pub async fn execute(&self, line: &str) -> Reply {
        let command = match parse(line) {
            Ok(command) => command,
            Err(err) => return Reply::line(err),
        };
        debug!(?command, "console command parsed");

        match command {
            ConsoleCommand::Quit => Reply::Quit,
            ConsoleCommand::Help => Reply::Output(HELP.to_owned()),
            ConsoleCommand::Show => shown(self.service().all_projects().await, |projects| {
                ProjectListing(projects).to_string()
            }),
            ConsoleCommand::Today => shown(self.service().today_by_project().await, |groups| {
                TodayListing(groups).to_string()
            }),
            ConsoleCommand::ViewByDeadline => {
                shown(self.service().view_by_deadline().await, |groups| {
                    DeadlineListing(groups).to_string()
                })
            }
            ConsoleCommand::AddProject { name } => {
                self.submit(Command::AddProject { name }, None).await
            }
            ConsoleCommand::AddTask {
                project_id,
                description,
            } => {
                self.submit(
                    Command::AddTask {
                        project_id,
                        description,
                    },
                    None,
                )
                .await
            }
            ConsoleCommand::Check { task_id, checked } => {
                self.submit(Command::CheckTask { task_id, checked }, None)
                    .await
            }
            ConsoleCommand::Deadline { task_id, deadline } => {
                let confirmation = format!("Deadline set for task {task_id}.");
                self.submit(Command::SetDeadline { task_id, deadline }, Some(confirmation))
                    .await
            }
        }
    }

    async fn submit(&self, command: Command, confirmation: Option<String>) -> Reply {
        let result = self.dispatcher.dispatch(command).await;
        if result.is_success() {
            confirmation.map_or_else(Reply::silent, Reply::line)
        } else {
            Reply::line(result.error().unwrap_or("command failed"))
        }
    }
}

fn shown<T>(result: TaskServiceResult<T>, view: impl FnOnce(&T) -> String) -> Reply {
    match result {
        Ok(value) => Reply::Output(view(&value)),
        Err(err) => Reply::line(err),
    }
}
