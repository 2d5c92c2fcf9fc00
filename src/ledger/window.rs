use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{EngineError, Result};

use super::period::days_in_month;

/// Inclusive calendar range `[start, end]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(EngineError::InvalidInput(format!(
                "window end {end} precedes start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of calendar days covered, both ends included.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Window selector as offered to the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WindowKind {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Custom,
}

impl WindowKind {
    pub const ALL: [WindowKind; 5] = [
        WindowKind::Daily,
        WindowKind::Weekly,
        WindowKind::Monthly,
        WindowKind::Yearly,
        WindowKind::Custom,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WindowKind::Daily => "Daily",
            WindowKind::Weekly => "Weekly",
            WindowKind::Monthly => "Monthly",
            WindowKind::Yearly => "Yearly",
            WindowKind::Custom => "Custom",
        }
    }

    /// Maps a picker label onto a window kind; unknown labels select `Daily`.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(label.trim()))
            .unwrap_or(WindowKind::Daily)
    }

    /// Builds the window; the range only matters for `Custom`.
    pub fn with_range(self, start: NaiveDate, end: NaiveDate) -> BalanceWindow {
        match self {
            WindowKind::Daily => BalanceWindow::Daily,
            WindowKind::Weekly => BalanceWindow::Weekly,
            WindowKind::Monthly => BalanceWindow::Monthly,
            WindowKind::Yearly => BalanceWindow::Yearly,
            WindowKind::Custom => BalanceWindow::Custom { start, end },
        }
    }
}

/// Period over which balances are aggregated. Named windows are relative to "today".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BalanceWindow {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Custom { start: NaiveDate, end: NaiveDate },
}

impl BalanceWindow {
    pub fn kind(&self) -> WindowKind {
        match self {
            BalanceWindow::Daily => WindowKind::Daily,
            BalanceWindow::Weekly => WindowKind::Weekly,
            BalanceWindow::Monthly => WindowKind::Monthly,
            BalanceWindow::Yearly => WindowKind::Yearly,
            BalanceWindow::Custom { .. } => WindowKind::Custom,
        }
    }

    /// Resolves the window to concrete dates relative to `today`.
    ///
    /// - `Daily`: today only.
    /// - `Weekly`: today's ISO week (Monday to Sunday), restricted to today's calendar
    ///   year so a week straddling New Year never pulls in the other year's days. This
    ///   deliberately differs from comparing ISO week number and year separately, which
    ///   would also count Jan 1-7 of the same year when today is Dec 30 or 31.
    /// - `Monthly` / `Yearly`: today's calendar month / year.
    /// - `Custom`: `[start, end]`; an inverted range falls back to `[today, today]`.
    pub fn bounds(&self, today: NaiveDate) -> DateWindow {
        match *self {
            BalanceWindow::Daily => DateWindow::single(today),
            BalanceWindow::Weekly => week_bounds(today),
            BalanceWindow::Monthly => month_bounds(today),
            BalanceWindow::Yearly => year_bounds(today),
            BalanceWindow::Custom { start, end } => match DateWindow::new(start, end) {
                Ok(window) => window,
                Err(_) => {
                    warn!(%start, %end, %today, "custom window is inverted; using today only");
                    DateWindow::single(today)
                }
            },
        }
    }

    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        self.bounds(today).contains(date)
    }
}

fn week_bounds(today: NaiveDate) -> DateWindow {
    let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
    let sunday = monday + Duration::days(6);
    let year = year_bounds(today);
    DateWindow {
        start: monday.max(year.start),
        end: sunday.min(year.end),
    }
}

fn month_bounds(today: NaiveDate) -> DateWindow {
    let last_day = days_in_month(today.year(), today.month()).unwrap_or(28);
    DateWindow {
        start: today.with_day(1).unwrap_or(today),
        end: today.with_day(last_day).unwrap_or(today),
    }
}

fn year_bounds(today: NaiveDate) -> DateWindow {
    DateWindow {
        start: today.with_ordinal(1).unwrap_or(today),
        end: NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap_or(today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_window_rejects_inverted_ranges() {
        assert!(DateWindow::new(date(2024, 3, 10), date(2024, 3, 5)).is_err());
        let single = DateWindow::new(date(2024, 3, 5), date(2024, 3, 5)).unwrap();
        assert_eq!(single.days(), 1);
    }

    #[test]
    fn weekly_bounds_run_monday_to_sunday() {
        // 2024-03-13 is a Wednesday.
        let window = BalanceWindow::Weekly.bounds(date(2024, 3, 13));
        assert_eq!(window, DateWindow {
            start: date(2024, 3, 11),
            end: date(2024, 3, 17),
        });
    }

    #[test]
    fn weekly_bounds_stay_inside_the_calendar_year() {
        // 2024-12-30 is a Monday in ISO week 1 of 2025.
        let window = BalanceWindow::Weekly.bounds(date(2024, 12, 31));
        assert_eq!(window.start, date(2024, 12, 30));
        assert_eq!(window.end, date(2024, 12, 31));
        assert!(!BalanceWindow::Weekly.contains(date(2024, 1, 2), date(2024, 12, 31)));
        assert!(!BalanceWindow::Weekly.contains(date(2025, 1, 1), date(2024, 12, 31)));
        for day in 1..=7 {
            assert!(!BalanceWindow::Weekly.contains(date(2024, 1, day), date(2024, 12, 30)));
        }

        let window = BalanceWindow::Weekly.bounds(date(2025, 1, 2));
        assert_eq!(window.start, date(2025, 1, 1));
        assert_eq!(window.end, date(2025, 1, 5));
    }

    #[test]
    fn monthly_and_yearly_bounds() {
        assert_eq!(
            BalanceWindow::Monthly.bounds(date(2024, 2, 10)),
            DateWindow {
                start: date(2024, 2, 1),
                end: date(2024, 2, 29),
            }
        );
        assert_eq!(
            BalanceWindow::Yearly.bounds(date(2024, 7, 4)),
            DateWindow {
                start: date(2024, 1, 1),
                end: date(2024, 12, 31),
            }
        );
    }

    #[test]
    fn inverted_custom_range_falls_back_to_today() {
        let today = date(2024, 6, 1);
        let window = BalanceWindow::Custom {
            start: date(2024, 3, 10),
            end: date(2024, 3, 5),
        };
        assert_eq!(window.bounds(today), DateWindow::single(today));
    }

    #[test]
    fn labels_map_to_kinds() {
        for kind in WindowKind::ALL {
            assert_eq!(WindowKind::from_label(kind.label()), kind);
        }
        assert_eq!(WindowKind::from_label("Fortnightly"), WindowKind::Daily);
        let start = date(2024, 1, 1);
        let end = date(2024, 1, 31);
        assert_eq!(
            WindowKind::Custom.with_range(start, end),
            BalanceWindow::Custom { start, end }
        );
        assert_eq!(WindowKind::Yearly.with_range(start, end), BalanceWindow::Yearly);
        assert_eq!(BalanceWindow::Custom { start, end }.kind(), WindowKind::Custom);
    }
}
