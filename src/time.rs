//! Date normalization and the clock seam.
//!
//! Every comparison in the engine happens on calendar dates. Timestamps coming from
//! callers are stripped to their date at the boundary with [`normalize`] (or
//! [`normalize_local`] for zoned values) and "today" is always taken from a [`Clock`].

use chrono::{DateTime, Days, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::errors::{EngineError, Result};

/// Clock abstracts access to the current wall-clock time so computations stay
/// deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current local wall-clock timestamp.
    fn now(&self) -> NaiveDateTime;

    /// Returns today's calendar date. Defaults to `normalize(now())`.
    fn today(&self) -> NaiveDate {
        normalize(self.now())
    }
}

/// Clock backed by the system's local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a single date, used by tests and replays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0.and_time(NaiveTime::MIN)
    }

    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Strips the time of day so that two timestamps on the same calendar day compare equal.
pub fn normalize(timestamp: NaiveDateTime) -> NaiveDate {
    timestamp.date()
}

/// Strips the time of day from a zoned timestamp, keeping the calendar date as seen in
/// its own time zone.
pub fn normalize_local<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> NaiveDate {
    timestamp.date_naive()
}

/// `date` moved by `days` (negative moves back), or `None` past the calendar's range.
pub fn offset_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    }
}

/// Parses a date supplied at an input boundary.
///
/// Accepts plain `YYYY-MM-DD` dates, `YYYY-MM-DDTHH:MM:SS` timestamps and RFC 3339
/// timestamps; the time component is discarded.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidInput("date is empty".into()));
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Ok(normalize(timestamp));
    }
    let zoned = DateTime::parse_from_rfc3339(trimmed)?;
    Ok(normalize_local(&zoned))
}
