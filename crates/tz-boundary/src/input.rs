//! Input normalization: turn any accepted input shape into a wall-clock
//! reading in the target timezone.
//!
//! Zoned inputs are *reinterpreted*, not converted: their local clock fields
//! are kept and relabeled with the target zone. The instant they denoted in
//! their original zone plays no further part.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::error::{BoundaryError, Result};

/// One of the four accepted input shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum TemporalInput {
    /// A `YYYY-MM-DD` date string, validated on normalization.
    Text(String),
    /// A calendar date with no time of day.
    Date(NaiveDate),
    /// A wall-clock timestamp with no zone.
    Local(NaiveDateTime),
    /// A timestamp already attached to a zone.
    Zoned(DateTime<Tz>),
}

impl TemporalInput {
    /// Produce the wall-clock reading that the boundary operators work on.
    ///
    /// The target zone is not needed here: every shape yields a reading that
    /// is interpreted in the explicitly passed zone afterwards.
    pub fn to_local(&self) -> Result<NaiveDateTime> {
        match self {
            TemporalInput::Text(s) => Ok(parse_date_string(s)?.and_time(NaiveTime::MIN)),
            TemporalInput::Date(date) => Ok(date.and_time(NaiveTime::MIN)),
            TemporalInput::Local(naive) => Ok(*naive),
            TemporalInput::Zoned(zoned) => Ok(zoned.naive_local()),
        }
    }

    /// Short name of the input shape, for diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            TemporalInput::Text(_) => "text",
            TemporalInput::Date(_) => "date",
            TemporalInput::Local(_) => "local",
            TemporalInput::Zoned(_) => "zoned",
        }
    }
}

impl From<&str> for TemporalInput {
    fn from(s: &str) -> Self {
        TemporalInput::Text(s.to_string())
    }
}

impl From<String> for TemporalInput {
    fn from(s: String) -> Self {
        TemporalInput::Text(s)
    }
}

impl From<&String> for TemporalInput {
    fn from(s: &String) -> Self {
        TemporalInput::Text(s.clone())
    }
}

impl From<NaiveDate> for TemporalInput {
    fn from(date: NaiveDate) -> Self {
        TemporalInput::Date(date)
    }
}

impl From<NaiveDateTime> for TemporalInput {
    fn from(naive: NaiveDateTime) -> Self {
        TemporalInput::Local(naive)
    }
}

impl From<DateTime<Tz>> for TemporalInput {
    fn from(zoned: DateTime<Tz>) -> Self {
        TemporalInput::Zoned(zoned)
    }
}

impl From<DateTime<Utc>> for TemporalInput {
    fn from(utc: DateTime<Utc>) -> Self {
        TemporalInput::Zoned(utc.with_timezone(&Tz::UTC))
    }
}

/// Parse a strict `YYYY-MM-DD` date string.
///
/// The string must be exactly ten ASCII bytes: a four-digit year, a
/// zero-padded two-digit month and day, and hyphens at offsets 4 and 7.
/// Whitespace, signs, and single-digit fields are all rejected.
///
/// # Errors
///
/// Returns [`BoundaryError::MalformedDateString`] for any other shape and for
/// well-shaped strings naming a day that does not exist (e.g. `2018-02-30`).
pub fn parse_date_string(s: &str) -> Result<NaiveDate> {
    let malformed = |reason: &str| BoundaryError::MalformedDateString(format!("'{s}': {reason}"));

    let bytes = s.as_bytes();
    if bytes.len() != 10 {
        return Err(malformed("expected YYYY-MM-DD"));
    }
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(malformed("expected YYYY-MM-DD"));
    }

    let year = parse_digits(&bytes[0..4]).ok_or_else(|| malformed("year is not numeric"))?;
    let month = parse_digits(&bytes[5..7]).ok_or_else(|| malformed("month is not numeric"))?;
    let day = parse_digits(&bytes[8..10]).ok_or_else(|| malformed("day is not numeric"))?;

    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| malformed("month or day out of range"))
}

/// Parse an IANA timezone string into `Tz`.
pub fn parse_timezone(s: &str) -> Result<Tz> {
    s.parse::<Tz>()
        .map_err(|_| BoundaryError::UnknownTimezone(format!("'{s}'")))
}

fn parse_digits(field: &[u8]) -> Option<u32> {
    field.iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}
