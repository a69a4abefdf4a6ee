//! Configurable first day of the week.
//!
//! [`WeekStart`] is the only week-start representation used past the public
//! boundary. Callers may supply it in one of three literal encodings, each
//! normalized immediately:
//!
//! - an integer `1..=7` using ISO 8601 numbering (1 = Monday, 7 = Sunday),
//!   via [`TryFrom<u8>`] or [`TryFrom<i64>`]
//! - a day token, via [`From<chrono::Weekday>`]
//! - a day name string (`"sunday"`, `"Mon"`, `"3"`), via [`FromStr`]

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::BoundaryError;

/// Which day begins a week for the start-of-week boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl WeekStart {
    /// All seven variants, Sunday first.
    pub const ALL: [WeekStart; 7] = [
        WeekStart::Sunday,
        WeekStart::Monday,
        WeekStart::Tuesday,
        WeekStart::Wednesday,
        WeekStart::Thursday,
        WeekStart::Friday,
        WeekStart::Saturday,
    ];

    /// The equivalent `chrono` weekday.
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Tuesday => Weekday::Tue,
            WeekStart::Wednesday => Weekday::Wed,
            WeekStart::Thursday => Weekday::Thu,
            WeekStart::Friday => Weekday::Fri,
            WeekStart::Saturday => Weekday::Sat,
        }
    }

    /// ISO 8601 day number: Monday = 1 through Sunday = 7.
    pub fn number(self) -> u8 {
        self.weekday().number_from_monday() as u8
    }

    /// How many calendar days `weekday` lies after this week start.
    ///
    /// Always in `0..=6`.
    pub fn days_since(self, weekday: Weekday) -> i64 {
        let day = weekday.num_days_from_sunday() as i64;
        let start = self.weekday().num_days_from_sunday() as i64;
        (day - start + 7) % 7
    }

    fn name(self) -> &'static str {
        match self {
            WeekStart::Sunday => "sunday",
            WeekStart::Monday => "monday",
            WeekStart::Tuesday => "tuesday",
            WeekStart::Wednesday => "wednesday",
            WeekStart::Thursday => "thursday",
            WeekStart::Friday => "friday",
            WeekStart::Saturday => "saturday",
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Weekday> for WeekStart {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => WeekStart::Sunday,
            Weekday::Mon => WeekStart::Monday,
            Weekday::Tue => WeekStart::Tuesday,
            Weekday::Wed => WeekStart::Wednesday,
            Weekday::Thu => WeekStart::Thursday,
            Weekday::Fri => WeekStart::Friday,
            Weekday::Sat => WeekStart::Saturday,
        }
    }
}

impl From<WeekStart> for Weekday {
    fn from(week_start: WeekStart) -> Self {
        week_start.weekday()
    }
}

impl TryFrom<u8> for WeekStart {
    type Error = BoundaryError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(WeekStart::Monday),
            2 => Ok(WeekStart::Tuesday),
            3 => Ok(WeekStart::Wednesday),
            4 => Ok(WeekStart::Thursday),
            5 => Ok(WeekStart::Friday),
            6 => Ok(WeekStart::Saturday),
            7 => Ok(WeekStart::Sunday),
            _ => Err(BoundaryError::InvalidWeekStart(format!(
                "{n} is outside 1-7"
            ))),
        }
    }
}

impl TryFrom<i64> for WeekStart {
    type Error = BoundaryError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        u8::try_from(n)
            .map_err(|_| BoundaryError::InvalidWeekStart(format!("{n} is outside 1-7")))
            .and_then(WeekStart::try_from)
    }
}

impl FromStr for WeekStart {
    type Err = BoundaryError;

    /// Parse a day name (case-insensitive, full or abbreviated) or an ISO
    /// day number `"1"`..`"7"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            "monday" | "mon" => Ok(WeekStart::Monday),
            "tuesday" | "tue" | "tues" => Ok(WeekStart::Tuesday),
            "wednesday" | "wed" => Ok(WeekStart::Wednesday),
            "thursday" | "thu" | "thurs" => Ok(WeekStart::Thursday),
            "friday" | "fri" => Ok(WeekStart::Friday),
            "saturday" | "sat" => Ok(WeekStart::Saturday),
            digits if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => digits
                .parse::<u8>()
                .map_err(|_| BoundaryError::InvalidWeekStart(format!("'{s}'")))
                .and_then(WeekStart::try_from),
            _ => Err(BoundaryError::InvalidWeekStart(format!(
                "'{s}' is not a day name"
            ))),
        }
    }
}
