//! Error types for project and task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The project name is empty after trimming.
    #[error("Project name is required")]
    EmptyProjectName,

    /// The project name exceeds the length limit.
    #[error("Project name cannot exceed {max} characters")]
    ProjectNameTooLong {
        /// Rejected name.
        name: String,
        /// Maximum accepted length.
        max: usize,
    },

    /// The project name holds a character other than an ASCII letter or
    /// digit, whitespace, `-` or `_`.
    #[error("Project name can only contain letters, numbers, spaces, hyphens, and underscores")]
    InvalidProjectNameCharacters(String),

    /// The task description is empty after trimming.
    #[error("Task description is required")]
    EmptyTaskDescription,

    /// The task description exceeds the length limit.
    #[error("Task description cannot exceed {max} characters")]
    TaskDescriptionTooLong {
        /// Maximum accepted length.
        max: usize,
    },

    /// A project identifier of zero was supplied.
    #[error("Project ID must be greater than 0, got {0}")]
    InvalidProjectId(u64),

    /// A task identifier of zero was supplied.
    #[error("Task ID must be greater than 0, got {0}")]
    InvalidTaskId(u64),

    /// An identifier could not be parsed as an integer.
    #[error("Invalid ID '{0}', expected a positive integer")]
    UnparsableId(String),
}

/// Coarse classification of failures for adapters and command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A referenced project or task does not exist.
    NotFound,
    /// A project name is already taken.
    AlreadyExists,
    /// Input failed validation.
    Validation,
    /// Unexpected internal failure.
    Internal,
}
