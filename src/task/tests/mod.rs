//! Unit tests for the project and task management core.

mod agenda_tests;
mod service_tests;

use chrono::NaiveDate;

/// Date used as "today" throughout the unit tests.
pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid calendar date")
}

/// Returns `today()` shifted by `days`.
pub(super) fn days_from_today(days: i64) -> NaiveDate {
    today() + chrono::TimeDelta::days(days)
}
