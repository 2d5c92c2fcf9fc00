use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// How often a transaction repeats.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RecurrencePeriod {
    #[default]
    None,
    Daily,
    Weekly,
    Fortnightly,
    Monthly,
    Yearly,
}

impl RecurrencePeriod {
    pub const ALL: [RecurrencePeriod; 6] = [
        RecurrencePeriod::None,
        RecurrencePeriod::Daily,
        RecurrencePeriod::Weekly,
        RecurrencePeriod::Fortnightly,
        RecurrencePeriod::Monthly,
        RecurrencePeriod::Yearly,
    ];

    pub fn is_recurring(&self) -> bool {
        !matches!(self, RecurrencePeriod::None)
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecurrencePeriod::None => "Never",
            RecurrencePeriod::Daily => "Daily",
            RecurrencePeriod::Weekly => "Weekly",
            RecurrencePeriod::Fortnightly => "Fortnightly",
            RecurrencePeriod::Monthly => "Monthly",
            RecurrencePeriod::Yearly => "Yearly",
        }
    }

    /// Maps a picker label onto a period. Unknown labels are treated as non-recurring.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|period| period.label().eq_ignore_ascii_case(label.trim()))
            .unwrap_or_default()
    }

    /// Returns the `index`-th occurrence counted from `anchor` (index 0 is the anchor).
    ///
    /// Month and year steps are always computed from the anchor, never from the previous
    /// occurrence, and clamp the day to the target month's length. A schedule anchored on
    /// the 31st therefore lands on the 31st whenever the month has one and on the last
    /// day otherwise. `None` when the period does not repeat or the date overflows.
    pub fn occurrence(&self, anchor: NaiveDate, index: u32) -> Option<NaiveDate> {
        if index == 0 {
            return Some(anchor);
        }
        match self {
            RecurrencePeriod::None => None,
            RecurrencePeriod::Daily => anchor.checked_add_days(Days::new(u64::from(index))),
            RecurrencePeriod::Weekly => anchor.checked_add_days(Days::new(7 * u64::from(index))),
            RecurrencePeriod::Fortnightly => {
                anchor.checked_add_days(Days::new(14 * u64::from(index)))
            }
            RecurrencePeriod::Monthly => shift_month(anchor, index),
            RecurrencePeriod::Yearly => shift_year(anchor, index),
        }
    }
}

fn shift_month(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    let month_index = date.month0() as i64 + i64::from(months);
    let year = i32::try_from(date.year() as i64 + month_index.div_euclid(12)).ok()?;
    let month = month_index.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month)?);
    NaiveDate::from_ymd_opt(year, month, day)
}

fn shift_year(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    let year = date.year().checked_add(i32::try_from(years).ok()?)?;
    let day = date.day().min(days_in_month(year, date.month())?);
    NaiveDate::from_ymd_opt(year, date.month(), day)
}

pub(crate) fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    first_next.pred_opt().map(|last| last.day())
}
