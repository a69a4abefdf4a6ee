//! # tz-boundary
//!
//! Convert a local date or timestamp in an IANA timezone into the UTC instant
//! at which its day, week, month, or year begins.
//!
//! Boundaries are computed with calendar arithmetic on the local wall clock
//! and only then projected onto UTC through `chrono-tz`, so results stay
//! correct across daylight-saving transitions. Local readings that a DST
//! transition makes ambiguous or impossible are resolved by fixed rules
//! documented in [`dst`].
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use tz_boundary::{start_of_month_utc, start_of_week_utc};
//!
//! let month = start_of_month_utc("2018-09-03", "America/Denver").unwrap();
//! assert_eq!(month, Utc.with_ymd_and_hms(2018, 9, 1, 6, 0, 0).unwrap());
//!
//! let week = start_of_week_utc("2018-09-01", "America/Denver", None).unwrap();
//! assert_eq!(week, Utc.with_ymd_and_hms(2018, 8, 26, 6, 0, 0).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`convert`] - public entry points (`start_of_*_utc`, `to_utc`)
//! - [`input`] - accepted input shapes and the strict `YYYY-MM-DD` parser
//! - [`boundary`] - start-of-period operators on wall-clock readings
//! - [`dst`] - ambiguous/skipped local time resolution and UTC projection
//! - [`week`] - configurable week start
//! - [`error`] - error types
//!
//! ## Cargo features
//!
//! - `logging` - emit resolution and DST disambiguation events through the
//!   [`log`](https://docs.rs/log) crate.

#[macro_use]
mod logging;

pub mod boundary;
pub mod convert;
pub mod dst;
pub mod error;
pub mod input;
pub mod week;

pub use boundary::Period;
pub use convert::{
    start_of_day_utc, start_of_month_utc, start_of_period_utc, start_of_week_utc,
    start_of_week_utc_with_options, start_of_year_utc, to_utc, BoundaryOptions,
};
pub use dst::LocalResolution;
pub use error::BoundaryError;
pub use input::{parse_date_string, parse_timezone, TemporalInput};
pub use week::WeekStart;
