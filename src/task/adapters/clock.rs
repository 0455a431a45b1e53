//! Clock adapter pinned to a single instant.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use mockable::Clock;

/// A [`Clock`] that always reports the same instant.
///
/// Useful wherever "today" must not drift, such as replaying a session or
/// exercising deadline views deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: DateTime<Local>,
}

impl FixedClock {
    /// Creates a clock frozen at `now`.
    #[must_use]
    pub const fn new(now: DateTime<Local>) -> Self {
        Self { now }
    }

    /// Creates a clock frozen at local noon on `date`.
    ///
    /// Returns `None` when local noon does not exist on that date in the
    /// host time zone, or cannot be represented.
    #[must_use]
    pub fn on(date: NaiveDate) -> Option<Self> {
        let noon = date.and_time(NaiveTime::from_hms_opt(12, 0, 0)?);
        Local
            .from_local_datetime(&noon)
            .earliest()
            .map(Self::new)
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.now
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now.with_timezone(&Utc)
    }
}
