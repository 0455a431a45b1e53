//! Tasklist: a personal task list with console and HTTP front ends.
//!
//! Projects own ordered lists of tasks. Tasks can be checked off and given
//! deadlines, and read-only views group them by deadline and by project.
//!
//! # Architecture
//!
//! Tasklist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store, clocks)
//!
//! # Modules
//!
//! - [`task`]: Projects, tasks, commands, and grouped views
//! - [`console`]: Line-oriented console front end
//! - [`web`]: JSON-over-HTTP front end
//! - [`config`]: Command-line and environment configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod console;
pub mod task;
pub mod telemetry;
pub mod web;
