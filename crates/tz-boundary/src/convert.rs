//! Public entry points: local input + IANA zone -> UTC boundary instant.
//!
//! Every operation runs the same three steps:
//!
//! 1. normalize the input to a wall-clock reading ([`TemporalInput::to_local`])
//! 2. move it to the start of the period ([`Period::start_of`])
//! 3. attach the zone and project onto UTC ([`crate::dst::project_to_utc`])
//!
//! The timezone passed by the caller is always the one used, whatever zone a
//! [`TemporalInput::Zoned`] value carried.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::boundary::Period;
use crate::dst;
use crate::error::{BoundaryError, Result};
use crate::input::{parse_timezone, TemporalInput};
use crate::week::WeekStart;

/// Options for [`start_of_week_utc_with_options`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryOptions {
    /// Which day starts the week. Sunday unless set.
    pub week_start: WeekStart,
}

/// Attach `timezone` to a naive local timestamp and project it onto UTC.
///
/// Ambiguous readings resolve to the earlier occurrence; readings skipped by a
/// DST gap shift forward to the first valid instant (see [`crate::dst`]).
///
/// # Errors
///
/// Returns [`BoundaryError::UnknownTimezone`](crate::BoundaryError::UnknownTimezone)
/// if `timezone` is not an IANA identifier.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use tz_boundary::to_utc;
///
/// let local = NaiveDate::from_ymd_opt(2018, 9, 1)
///     .unwrap()
///     .and_hms_opt(12, 0, 0)
///     .unwrap();
/// let utc = to_utc("America/Denver", local).unwrap();
/// assert_eq!(utc, Utc.with_ymd_and_hms(2018, 9, 1, 18, 0, 0).unwrap());
/// ```
pub fn to_utc(timezone: &str, local: NaiveDateTime) -> Result<DateTime<Utc>> {
    let tz = parse_timezone(timezone)?;
    dst::project_to_utc(&tz, local)
}

/// UTC instant of the start of `period` containing `input`, read in `timezone`.
///
/// The four named operations delegate here.
pub fn start_of_period_utc(
    input: impl Into<TemporalInput>,
    timezone: &str,
    period: Period,
) -> Result<DateTime<Utc>> {
    let input = input.into();
    // Resolve the zone first so an unknown zone is reported even when the
    // input is malformed as well.
    let tz = parse_timezone(timezone)?;
    let local = input.to_local()?;
    let boundary = period.start_of(local).ok_or_else(|| {
        BoundaryError::UnresolvableLocalTime(format!(
            "start of {period} for '{local}' precedes the earliest supported date"
        ))
    })?;
    trace!(
        "start of {period} for {} input {local} in {tz}: {boundary}",
        input.shape()
    );
    dst::project_to_utc(&tz, boundary)
}

/// UTC instant of local midnight on the day of `input` in `timezone`.
///
/// Accepts a `YYYY-MM-DD` string, a `NaiveDate`, a `NaiveDateTime`, or a zoned
/// `DateTime` (whose wall clock is reinterpreted in `timezone`).
///
/// # Errors
///
/// Returns [`BoundaryError::MalformedDateString`](crate::BoundaryError::MalformedDateString)
/// for a string that is not `YYYY-MM-DD`, and
/// [`BoundaryError::UnknownTimezone`](crate::BoundaryError::UnknownTimezone) for an
/// unknown zone.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tz_boundary::start_of_day_utc;
///
/// let utc = start_of_day_utc("2018-09-01", "America/Denver").unwrap();
/// assert_eq!(utc, Utc.with_ymd_and_hms(2018, 9, 1, 6, 0, 0).unwrap());
/// ```
pub fn start_of_day_utc(input: impl Into<TemporalInput>, timezone: &str) -> Result<DateTime<Utc>> {
    start_of_period_utc(input, timezone, Period::Day)
}

/// UTC instant of local midnight on the first day of the week containing
/// `input`. `week_start` defaults to Sunday.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tz_boundary::{start_of_week_utc, WeekStart};
///
/// // 2018-09-01 is a Saturday.
/// let sunday = start_of_week_utc("2018-09-01", "America/Denver", None).unwrap();
/// assert_eq!(sunday, Utc.with_ymd_and_hms(2018, 8, 26, 6, 0, 0).unwrap());
///
/// let monday = start_of_week_utc("2018-09-01", "America/Denver", Some(WeekStart::Monday)).unwrap();
/// assert_eq!(monday, Utc.with_ymd_and_hms(2018, 8, 27, 6, 0, 0).unwrap());
/// ```
pub fn start_of_week_utc(
    input: impl Into<TemporalInput>,
    timezone: &str,
    week_start: Option<WeekStart>,
) -> Result<DateTime<Utc>> {
    start_of_period_utc(input, timezone, Period::Week(week_start.unwrap_or_default()))
}

/// Like [`start_of_week_utc`], with the week start taken from `options`.
pub fn start_of_week_utc_with_options(
    input: impl Into<TemporalInput>,
    timezone: &str,
    options: &BoundaryOptions,
) -> Result<DateTime<Utc>> {
    start_of_week_utc(input, timezone, Some(options.week_start))
}

/// UTC instant of local midnight on the first of the month containing `input`.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tz_boundary::start_of_month_utc;
///
/// let utc = start_of_month_utc("2018-09-03", "America/Denver").unwrap();
/// assert_eq!(utc, Utc.with_ymd_and_hms(2018, 9, 1, 6, 0, 0).unwrap());
/// ```
pub fn start_of_month_utc(
    input: impl Into<TemporalInput>,
    timezone: &str,
) -> Result<DateTime<Utc>> {
    start_of_period_utc(input, timezone, Period::Month)
}

/// UTC instant of local midnight on January 1st of the year containing `input`.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tz_boundary::start_of_year_utc;
///
/// // Denver is on MST (UTC-7) in January.
/// let utc = start_of_year_utc("2018-09-03", "America/Denver").unwrap();
/// assert_eq!(utc, Utc.with_ymd_and_hms(2018, 1, 1, 7, 0, 0).unwrap());
/// ```
pub fn start_of_year_utc(
    input: impl Into<TemporalInput>,
    timezone: &str,
) -> Result<DateTime<Utc>> {
    start_of_period_utc(input, timezone, Period::Year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, TimeZone};
    use chrono_tz::Tz;

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_every_input_shape_agrees() {
        let date = NaiveDate::from_ymd_opt(2018, 9, 1).unwrap();
        let naive = date.and_hms_opt(15, 20, 0).unwrap();
        let zoned = Tz::America__Denver.from_local_datetime(&naive).unwrap();

        let expected = utc(2018, 9, 1, 6);
        assert_eq!(start_of_day_utc("2018-09-01", "America/Denver").unwrap(), expected);
        assert_eq!(start_of_day_utc(date, "America/Denver").unwrap(), expected);
        assert_eq!(start_of_day_utc(naive, "America/Denver").unwrap(), expected);
        assert_eq!(start_of_day_utc(zoned, "America/Denver").unwrap(), expected);
    }

    #[test]
    fn test_zoned_input_is_reinterpreted_not_converted() {
        // 23:00 in Tokyo on Sep 1 is 08:00 in Denver on Sep 1, but the wall
        // clock "Sep 1 23:00" is what gets read in Denver.
        let tokyo = Tz::Asia__Tokyo.with_ymd_and_hms(2018, 9, 1, 23, 0, 0).unwrap();
        assert_eq!(
            start_of_day_utc(tokyo, "America/Denver").unwrap(),
            utc(2018, 9, 1, 6)
        );

        // 02:00 UTC on Sep 2 is Sep 1 in Denver, yet the reading is Sep 2.
        let early = Utc.with_ymd_and_hms(2018, 9, 2, 2, 0, 0).unwrap();
        assert_eq!(
            start_of_day_utc(early, "America/Denver").unwrap(),
            utc(2018, 9, 2, 6)
        );
    }

    #[test]
    fn test_week_options() {
        let options = BoundaryOptions {
            week_start: WeekStart::Monday,
        };
        assert_eq!(
            start_of_week_utc_with_options("2018-09-01", "America/Denver", &options).unwrap(),
            utc(2018, 8, 27, 6)
        );
        assert_eq!(BoundaryOptions::default().week_start, WeekStart::Sunday);
    }

    #[test]
    fn test_unknown_zone_reported_before_malformed_input() {
        let err = start_of_day_utc("2018-9-1", "Mars/Olympus").unwrap_err();
        assert!(matches!(err, BoundaryError::UnknownTimezone(_)));
    }

    #[test]
    fn test_boundaries_at_calendar_start() {
        let first = NaiveDate::MIN;
        let later = first.succ_opt().unwrap();
        // A Sunday-started week containing the day after MIN reaches back
        // before MIN unless MIN itself or its successor is a Sunday.
        let needs_earlier = ![first.weekday(), later.weekday()].contains(&chrono::Weekday::Sun);
        let result = start_of_week_utc(later, "UTC", None);
        if needs_earlier {
            assert!(matches!(result, Err(BoundaryError::UnresolvableLocalTime(_))));
        } else {
            assert!(result.is_ok());
        }

        assert!(matches!(
            start_of_day_utc(first, "Asia/Tokyo"),
            Err(BoundaryError::UnresolvableLocalTime(_))
        ));
    }

    #[test]
    fn test_to_utc_unknown_zone() {
        let local = NaiveDate::from_ymd_opt(2018, 9, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(matches!(
            to_utc("Not/AZone", local),
            Err(BoundaryError::UnknownTimezone(_))
        ));
    }
}
