use chrono::NaiveDate;
use tracing::{debug, warn};

use super::period::RecurrencePeriod;

/// Hard ceiling on generated occurrences: a century of daily repeats.
pub const MAX_OCCURRENCES: usize = 36_600;

/// Default surrogate horizon for schedules the user marks as never ending.
pub const NEVER_ENDING_YEARS: u32 = 12;

/// Enumerates every occurrence of a schedule, `start` first, up to and including `end`.
///
/// A non-recurring period yields `[start]` whatever `end` is, and so does an `end` that
/// lies before `start`.
pub fn expand(start: NaiveDate, period: RecurrencePeriod, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = vec![start];
    if !period.is_recurring() {
        return dates;
    }
    if end < start {
        debug!(%start, %end, period = period.label(), "end precedes start; single occurrence");
        return dates;
    }

    let mut index = 1u32;
    while let Some(next) = period.occurrence(start, index) {
        if next > end {
            break;
        }
        if dates.len() >= MAX_OCCURRENCES {
            warn!(%start, %end, period = period.label(), "occurrence ceiling reached");
            break;
        }
        dates.push(next);
        index += 1;
    }
    dates
}

/// End date used for a "never ending" schedule: `years` after `from`.
pub fn never_ending_end_date(from: NaiveDate, years: u32) -> NaiveDate {
    RecurrencePeriod::Yearly
        .occurrence(from, years)
        .unwrap_or(NaiveDate::MAX)
}

/// First occurrence on or after `today`.
pub fn next_occurrence(occurrences: &[NaiveDate], today: NaiveDate) -> Option<NaiveDate> {
    remaining_occurrences(occurrences, today).first().copied()
}

/// Occurrences on or after `today`. `occurrences` must be ascending.
pub fn remaining_occurrences(occurrences: &[NaiveDate], today: NaiveDate) -> &[NaiveDate] {
    let idx = occurrences.partition_point(|date| *date < today);
    &occurrences[idx..]
}

/// Occurrences inside the inclusive range `[start, end]`. `occurrences` must be ascending.
pub fn occurrences_within(
    occurrences: &[NaiveDate],
    start: NaiveDate,
    end: NaiveDate,
) -> &[NaiveDate] {
    if end < start {
        return &[];
    }
    let lo = occurrences.partition_point(|date| *date < start);
    let hi = occurrences.partition_point(|date| *date <= end);
    &occurrences[lo..hi]
}
