//! Deadline validation policy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Temporal constraint applied when a deadline is set.
///
/// The core accepts any date by default. Callers that want to forbid
/// deadlines in the past opt into [`DeadlinePolicy::RejectPast`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlinePolicy {
    /// Any calendar date is accepted, including past dates.
    #[default]
    Unrestricted,
    /// Dates strictly before the current date are rejected.
    RejectPast,
}

impl DeadlinePolicy {
    /// Returns `true` when `deadline` is acceptable given the current date.
    #[must_use]
    pub fn admits(self, deadline: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::RejectPast => deadline >= today,
        }
    }
}
