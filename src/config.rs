//! Command-line and environment configuration.

use crate::task::domain::DeadlinePolicy;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;

/// Default address for the HTTP server.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Top-level options for the `tasklist` binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "tasklist")]
#[command(about = "Personal task list with console and HTTP front ends", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Tracing filter directive, e.g. `info` or `tasklist=debug`
    #[arg(long = "log", env = "TASKLIST_LOG", default_value = "info", global = true)]
    pub log_filter: String,

    /// Reject deadlines that fall before today
    #[arg(long, env = "TASKLIST_REJECT_PAST_DEADLINES", global = true)]
    pub reject_past_deadlines: bool,

    /// Front end to run; defaults to the console
    #[command(subcommand)]
    pub mode: Option<Mode>,
}

/// Front end selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Mode {
    /// Interactive console on stdin and stdout
    Console,

    /// JSON API over HTTP
    Serve {
        /// Socket address to listen on
        #[arg(long, env = "TASKLIST_BIND", default_value = DEFAULT_BIND)]
        bind: SocketAddr,
    },
}

impl Cli {
    /// Returns the selected front end, falling back to the console.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode.clone().unwrap_or(Mode::Console)
    }

    /// Returns the deadline policy implied by the flags.
    #[must_use]
    pub const fn deadline_policy(&self) -> DeadlinePolicy {
        if self.reject_past_deadlines {
            DeadlinePolicy::RejectPast
        } else {
            DeadlinePolicy::Unrestricted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_to_console_without_restrictions() {
        let cli = Cli::try_parse_from(["tasklist"]).expect("parse");
        assert_eq!(cli.mode(), Mode::Console);
        assert_eq!(cli.deadline_policy(), DeadlinePolicy::Unrestricted);
        assert_eq!(cli.log_filter, "info");
    }

    #[test]
    fn serve_uses_default_bind_address() {
        let cli = Cli::try_parse_from(["tasklist", "serve"]).expect("parse");
        let expected: SocketAddr = DEFAULT_BIND.parse().expect("valid address");
        assert_eq!(cli.mode(), Mode::Serve { bind: expected });
    }

    #[rstest]
    #[case(&["tasklist", "--reject-past-deadlines", "console"])]
    #[case(&["tasklist", "console", "--reject-past-deadlines"])]
    fn strict_flag_is_global(#[case] args: &[&str]) {
        let cli = Cli::try_parse_from(args).expect("parse");
        assert_eq!(cli.deadline_policy(), DeadlinePolicy::RejectPast);
    }

    #[test]
    fn rejects_malformed_bind_address() {
        assert!(Cli::try_parse_from(["tasklist", "serve", "--bind", "nowhere"]).is_err());
    }
}
