use std::fmt;
use std::str::FromStr;

use chrono::{Days, Local, NaiveDate};

/// Error from parsing a user-supplied date string
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid date \"{0}\": expected YYYY-MM-DD")]
pub struct DateKeyError(pub String);

/// A calendar date used as a grouping key, rendered as `YYYY-MM-DD`.
///
/// The store treats it as opaque; the TUI's date selector steps it by
/// whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        DateKey(date)
    }

    /// Today in local time
    pub fn today() -> Self {
        DateKey(Local::now().date_naive())
    }

    /// The following day. Saturates at the chrono range limit.
    pub fn next_day(self) -> Self {
        DateKey(self.0.checked_add_days(Days::new(1)).unwrap_or(self.0))
    }

    /// The preceding day. Saturates at the chrono range limit.
    pub fn prev_day(self) -> Self {
        DateKey(self.0.checked_sub_days(Days::new(1)).unwrap_or(self.0))
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DateKey {
    type Err = DateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(DateKey)
            .map_err(|_| DateKeyError(s.to_string()))
    }
}
