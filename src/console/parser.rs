//! Parser for the line-oriented console grammar.

use crate::task::domain::{ProjectId, TaskId};
use chrono::NaiveDate;
use std::str::FromStr;
use thiserror::Error;

/// Console date format, `DD-MM-YYYY`.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// `add project <name>`
    AddProject {
        /// Name of the new project.
        name: String,
    },
    /// `add task <project id> <description>`
    AddTask {
        /// Owning project.
        project_id: ProjectId,
        /// Task description.
        description: String,
    },
    /// `check <id>` or `uncheck <id>`
    Check {
        /// Task to update.
        task_id: TaskId,
        /// `true` for `check`, `false` for `uncheck`.
        checked: bool,
    },
    /// `deadline <id> <DD-MM-YYYY>`
    Deadline {
        /// Task to update.
        task_id: TaskId,
        /// Parsed deadline.
        deadline: NaiveDate,
    },
    /// `show`
    Show,
    /// `today`
    Today,
    /// `view-by-deadline`
    ViewByDeadline,
    /// `help`
    Help,
    /// `quit`
    Quit,
}

/// Reasons a console line cannot be turned into a command.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConsoleParseError {
    /// The line was blank.
    #[error("Empty command")]
    Empty,

    /// The leading word is not a known command.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// `add` was not followed by a kind and an argument.
    #[error("Invalid add command format")]
    InvalidAddFormat,

    /// `add task` was not followed by a project and a description.
    #[error("Invalid add task command format")]
    InvalidAddTaskFormat,

    /// `add` was followed by something other than `project` or `task`.
    #[error("Unknown add command type: {0}")]
    UnknownAddKind(String),

    /// A project identifier was zero or not a number.
    #[error("Invalid project ID")]
    InvalidProjectId,

    /// A task identifier was missing, zero, or not a number.
    #[error("Invalid task ID")]
    InvalidTaskId,

    /// `deadline` did not receive both an identifier and a date.
    #[error("Invalid deadline command format")]
    InvalidDeadlineFormat,

    /// The date was not a valid `DD-MM-YYYY` calendar date.
    #[error("Invalid date format. Use DD-MM-YYYY")]
    InvalidDate,
}

/// Parses one console line.
///
/// The command word is case-insensitive; arguments are kept verbatim apart
/// from surrounding whitespace.
///
/// # Errors
///
/// Returns a [`ConsoleParseError`] describing the first problem found.
pub fn parse(line: &str) -> Result<ConsoleCommand, ConsoleParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(ConsoleParseError::Empty);
    }

    let (word, rest) = split_word(trimmed);
    match word.to_lowercase().as_str() {
        "add" => parse_add(rest),
        "check" => parse_task_id(rest).map(|task_id| ConsoleCommand::Check {
            task_id,
            checked: true,
        }),
        "uncheck" => parse_task_id(rest).map(|task_id| ConsoleCommand::Check {
            task_id,
            checked: false,
        }),
        "deadline" => parse_deadline_command(rest),
        "show" => Ok(ConsoleCommand::Show),
        "today" => Ok(ConsoleCommand::Today),
        "view-by-deadline" => Ok(ConsoleCommand::ViewByDeadline),
        "help" => Ok(ConsoleCommand::Help),
        "quit" => Ok(ConsoleCommand::Quit),
        _ => Err(ConsoleParseError::UnknownCommand(word.to_owned())),
    }
}

/// Parses a strict `DD-MM-YYYY` date.
///
/// # Errors
///
/// Returns [`ConsoleParseError::InvalidDate`] when the text has any other
/// shape or names a day that does not exist.
pub fn parse_date(text: &str) -> Result<NaiveDate, ConsoleParseError> {
    let well_formed = text.len() == 10
        && text.bytes().enumerate().all(|(position, byte)| {
            if position == 2 || position == 5 {
                byte == b'-'
            } else {
                byte.is_ascii_digit()
            }
        });
    if !well_formed {
        return Err(ConsoleParseError::InvalidDate);
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| ConsoleParseError::InvalidDate)
}

fn split_word(text: &str) -> (&str, &str) {
    text.split_once(char::is_whitespace)
        .map_or((text, ""), |(word, rest)| (word, rest.trim()))
}

fn parse_add(rest: &str) -> Result<ConsoleCommand, ConsoleParseError> {
    let (kind, argument) = split_word(rest);
    if kind.is_empty() || argument.is_empty() {
        return Err(ConsoleParseError::InvalidAddFormat);
    }

    match kind.to_lowercase().as_str() {
        "project" => Ok(ConsoleCommand::AddProject {
            name: argument.to_owned(),
        }),
        "task" => {
            let (project, description) = split_word(argument);
            if description.is_empty() {
                return Err(ConsoleParseError::InvalidAddTaskFormat);
            }
            let project_id =
                ProjectId::from_str(project).map_err(|_| ConsoleParseError::InvalidProjectId)?;
            Ok(ConsoleCommand::AddTask {
                project_id,
                description: description.to_owned(),
            })
        }
        _ => Err(ConsoleParseError::UnknownAddKind(kind.to_owned())),
    }
}

fn parse_task_id(text: &str) -> Result<TaskId, ConsoleParseError> {
    TaskId::from_str(text).map_err(|_| ConsoleParseError::InvalidTaskId)
}

fn parse_deadline_command(rest: &str) -> Result<ConsoleCommand, ConsoleParseError> {
    let (id, date) = split_word(rest);
    if id.is_empty() || date.is_empty() {
        return Err(ConsoleParseError::InvalidDeadlineFormat);
    }
    let task_id = parse_task_id(id)?;
    let deadline = parse_date(date)?;
    Ok(ConsoleCommand::Deadline { task_id, deadline })
}
