//! Error types for tz-boundary operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoundaryError {
    /// The input string is not a zero-padded `YYYY-MM-DD` calendar date.
    #[error("Malformed date string: {0}")]
    MalformedDateString(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// The week start is outside 1-7 or not a recognized day name.
    #[error("Invalid week start: {0}")]
    InvalidWeekStart(String),

    /// A local reading could not be mapped to any instant in its zone.
    #[error("Unresolvable local time: {0}")]
    UnresolvableLocalTime(String),
}

pub type Result<T> = std::result::Result<T, BoundaryError>;
