//! Line-oriented console front end.
//!
//! The console parses one command per line, forwards mutations to the
//! [`CommandDispatcher`](crate::task::services::CommandDispatcher), and
//! renders read-only views as plain text.

mod parser;
mod render;
mod session;

pub use parser::{ConsoleCommand, ConsoleParseError, DATE_FORMAT, parse, parse_date};
pub use render::{DeadlineListing, HELP, ProjectListing, TaskLine, TodayListing};
pub use session::{ConsoleSession, Reply, WELCOME};
