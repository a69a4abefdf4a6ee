//! Period boundary operators on wall-clock readings.
//!
//! Every operator works on calendar fields of a `NaiveDateTime`, never on
//! instants, so stepping back across a DST transition moves by whole
//! calendar days rather than multiples of 24 hours. Attaching a zone happens
//! later, in [`crate::dst`].

use std::fmt;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::week::WeekStart;

/// A calendar period whose start can be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    Week(WeekStart),
    Month,
    Year,
}

impl Period {
    /// The start of the period containing `local`, or `None` when that start
    /// falls before [`NaiveDate::MIN`].
    pub fn start_of(self, local: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            Period::Day => Some(start_of_day(local)),
            Period::Week(week_start) => start_of_week(local, week_start),
            Period::Month => Some(start_of_month(local)),
            Period::Year => Some(start_of_year(local)),
        }
    }

    /// Short name used in logs and CLI output.
    pub fn name(self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week(_) => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Week(ws) => write!(f, "week (starting {ws})"),
            other => f.write_str(other.name()),
        }
    }
}

/// Midnight of the same calendar day.
pub fn start_of_day(local: NaiveDateTime) -> NaiveDateTime {
    local.date().and_time(NaiveTime::MIN)
}

/// Midnight of the most recent `week_start` day on or before `local`.
///
/// `None` in the first days of the calendar, when that day would precede
/// [`NaiveDate::MIN`].
pub fn start_of_week(local: NaiveDateTime, week_start: WeekStart) -> Option<NaiveDateTime> {
    let date = local.date();
    let days_back = week_start.days_since(date.weekday()) as u64;
    date.checked_sub_days(Days::new(days_back))
        .map(|start| start.and_time(NaiveTime::MIN))
}

/// Midnight on the first day of the month.
pub fn start_of_month(local: NaiveDateTime) -> NaiveDateTime {
    first_of(local.date(), local.month()).and_time(NaiveTime::MIN)
}

/// Midnight on the first of January.
pub fn start_of_year(local: NaiveDateTime) -> NaiveDateTime {
    first_of(local.date(), 1).and_time(NaiveTime::MIN)
}

fn first_of(date: NaiveDate, month: u32) -> NaiveDate {
    // Day 1 exists in every month of every representable year.
    NaiveDate::from_ymd_opt(date.year(), month, 1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Timelike, Weekday};

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_start_of_day_zeroes_time() {
        let local = NaiveDate::from_ymd_opt(2018, 9, 1)
            .unwrap()
            .and_hms_nano_opt(17, 45, 12, 999_999_999)
            .unwrap();
        let start = start_of_day(local);
        assert_eq!(start, dt(2018, 9, 1, 0, 0, 0));
        assert_eq!(start.nanosecond(), 0);
    }

    #[test]
    fn test_start_of_week_default_sunday() {
        // 2018-09-01 is a Saturday.
        let start = start_of_week(dt(2018, 9, 1, 12, 0, 0), WeekStart::Sunday).unwrap();
        assert_eq!(start, dt(2018, 8, 26, 0, 0, 0));
        assert_eq!(start.weekday(), Weekday::Sun);
    }

    #[test]
    fn test_start_of_week_on_start_day_is_same_day() {
        let start = start_of_week(dt(2018, 8, 27, 8, 0, 0), WeekStart::Monday).unwrap();
        assert_eq!(start, dt(2018, 8, 27, 0, 0, 0));
    }

    #[test]
    fn test_start_of_week_every_start_day() {
        let local = dt(2018, 9, 5, 9, 30, 0); // Wednesday
        for ws in WeekStart::ALL {
            let start = start_of_week(local, ws).unwrap();
            assert_eq!(start.weekday(), ws.weekday(), "{ws}");
            let back = (local.date() - start.date()).num_days();
            assert!((0..7).contains(&back), "{ws}: {back}");
        }
    }

    #[test]
    fn test_start_of_week_crosses_year() {
        // 2019-01-02 is a Wednesday; the Sunday before is 2018-12-30.
        let start = start_of_week(dt(2019, 1, 2, 0, 0, 0), WeekStart::Sunday).unwrap();
        assert_eq!(start, dt(2018, 12, 30, 0, 0, 0));
    }

    #[test]
    fn test_start_of_week_before_calendar_start_is_none() {
        // Only the week start matching NaiveDate::MIN's own weekday fits.
        let first = NaiveDate::MIN.and_time(NaiveTime::MIN);
        let starts: Vec<_> = WeekStart::ALL
            .into_iter()
            .filter_map(|ws| start_of_week(first, ws))
            .collect();
        assert_eq!(starts, vec![first]);
    }

    #[test]
    fn test_start_of_month() {
        assert_eq!(start_of_month(dt(2018, 9, 3, 5, 0, 0)), dt(2018, 9, 1, 0, 0, 0));
        assert_eq!(start_of_month(dt(2020, 2, 29, 23, 59, 59)), dt(2020, 2, 1, 0, 0, 0));
    }

    #[test]
    fn test_start_of_year() {
        assert_eq!(start_of_year(dt(2018, 9, 3, 5, 0, 0)), dt(2018, 1, 1, 0, 0, 0));
        assert_eq!(start_of_year(dt(2018, 1, 1, 0, 0, 0)), dt(2018, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_period_dispatch() {
        let local = dt(2018, 9, 3, 5, 0, 0); // Monday
        assert_eq!(Period::Day.start_of(local), Some(dt(2018, 9, 3, 0, 0, 0)));
        assert_eq!(
            Period::Week(WeekStart::Sunday).start_of(local),
            Some(dt(2018, 9, 2, 0, 0, 0))
        );
        assert_eq!(Period::Month.start_of(local), Some(dt(2018, 9, 1, 0, 0, 0)));
        assert_eq!(Period::Year.start_of(local), Some(dt(2018, 1, 1, 0, 0, 0)));
    }
}
