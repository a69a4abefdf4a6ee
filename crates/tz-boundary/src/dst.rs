//! Projection of wall-clock readings onto instants, with DST disambiguation.
//!
//! A local reading attached to a zone maps to zero, one, or two instants.
//! The rules applied here are fixed:
//!
//! - **Unique**: the single instant.
//! - **Ambiguous** (clocks fall back, the reading occurs twice): the earlier
//!   instant, i.e. the one still using the pre-transition offset.
//! - **Skipped** (clocks spring forward, the reading never occurs): the first
//!   valid instant after the gap, which is the transition itself. In
//!   `America/New_York` on 2018-03-11, `02:30` resolves to `03:00 EDT`.
//!
//! A skipped reading is never mapped through a stale offset. If no valid
//! reading exists within [`GAP_SEARCH_LIMIT_HOURS`] of it, or the reading
//! falls outside chrono's representable instants once the offset is applied,
//! [`BoundaryError::UnresolvableLocalTime`] is returned.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::error::{BoundaryError, Result};

/// Widest gap, in hours, searched past a skipped reading.
///
/// The largest transition in the IANA database is one calendar day
/// (`Pacific/Apia`, 2011-12-30); this leaves twice that.
pub const GAP_SEARCH_LIMIT_HOURS: i64 = 48;

/// How a local reading maps onto instants in a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalResolution {
    Unique,
    Ambiguous,
    Skipped,
}

/// Classify `local` in `tz` without resolving it.
pub fn classify_local(tz: &Tz, local: NaiveDateTime) -> LocalResolution {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(_) => LocalResolution::Unique,
        LocalResult::Ambiguous(_, _) => LocalResolution::Ambiguous,
        LocalResult::None => LocalResolution::Skipped,
    }
}

/// Attach `tz` to `local`, applying the disambiguation rules above.
pub fn resolve_local(tz: &Tz, local: NaiveDateTime) -> Result<DateTime<Tz>> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => {
            trace!("{local} in {tz} resolved to {dt}");
            Ok(dt)
        }
        LocalResult::Ambiguous(a, b) => {
            let earlier = a.min(b);
            debug!(
                "{local} is ambiguous in {tz} ({a} or {b}), using earlier occurrence {earlier}"
            );
            Ok(earlier)
        }
        LocalResult::None => {
            let shifted = first_valid_after(tz, local)?;
            debug!("{local} does not exist in {tz}, shifted forward to {shifted}");
            Ok(shifted)
        }
    }
}

/// Resolve `local` in `tz` and re-express the instant in UTC.
pub fn project_to_utc(tz: &Tz, local: NaiveDateTime) -> Result<DateTime<Utc>> {
    resolve_local(tz, local).map(|dt| dt.with_timezone(&Utc))
}

/// The first instant after a skipped reading.
///
/// Gap boundaries fall on whole seconds in the IANA data, so the search runs
/// over whole seconds: widen geometrically until a valid reading is found,
/// then bisect down to the first one.
fn first_valid_after(tz: &Tz, local: NaiveDateTime) -> Result<DateTime<Tz>> {
    let unresolvable = || {
        warn!("no valid reading within {GAP_SEARCH_LIMIT_HOURS}h after {local} in {tz}");
        BoundaryError::UnresolvableLocalTime(format!("'{local}' in {tz}"))
    };
    let is_valid =
        |candidate: &NaiveDateTime| tz.from_local_datetime(candidate).earliest().is_some();

    // Near the edges of chrono's range the offset pushes the instant out of
    // bounds; that is not a gap and nothing after it is the answer.
    if !instant_in_range(tz, local) {
        return Err(unresolvable());
    }

    // Still inside the gap: the gap starts on a whole second.
    let mut lo = local.with_nanosecond(0).ok_or_else(unresolvable)?;

    let limit = Duration::hours(GAP_SEARCH_LIMIT_HOURS);
    let mut step = Duration::minutes(1);
    let mut hi = loop {
        if step > limit {
            return Err(unresolvable());
        }
        let candidate = local
            .with_nanosecond(0)
            .and_then(|base| base.checked_add_signed(step))
            .ok_or_else(unresolvable)?;
        if is_valid(&candidate) {
            break candidate;
        }
        lo = candidate;
        step = step * 2;
    };

    // Both ends sit on whole seconds; halving must keep them there.
    while (hi - lo).num_seconds() > 1 {
        let mid = lo + Duration::seconds((hi - lo).num_seconds() / 2);
        if is_valid(&mid) {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    tz.from_local_datetime(&hi)
        .earliest()
        .ok_or_else(unresolvable)
}

/// Whether `local`, taken back to UTC with the zone's offset, is representable.
fn instant_in_range(tz: &Tz, local: NaiveDateTime) -> bool {
    let offset = tz.offset_from_utc_datetime(&local).fix().local_minus_utc();
    local
        .checked_sub_signed(Duration::seconds(i64::from(offset)))
        .is_some()
}
