//! Error types for calendar and epoch construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar date validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Month outside 1..=12.
    InvalidMonth(u32),
    /// Day outside the month's range.
    InvalidDay { month: u32, day: u32 },
    /// Time-of-day field out of range.
    InvalidTimeOfDay(&'static str),
    /// Date string not in `YYYY-MM-DD[Thh:mm[:ss]]` form.
    DateParse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(m) => write!(f, "invalid month: {m}"),
            Self::InvalidDay { month, day } => write!(f, "invalid day {day} for month {month}"),
            Self::InvalidTimeOfDay(field) => write!(f, "invalid time of day: {field}"),
            Self::DateParse(msg) => write!(f, "date parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}
