use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::{balance, cashflow, BalanceWindow, Cashflow, DateWindow, Ledger, WindowKind};
use crate::time::Clock;

/// Cashflow for one resolved window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowSummary {
    pub kind: WindowKind,
    pub window: DateWindow,
    pub cashflow: Cashflow,
}

pub struct SummaryService;

impl SummaryService {
    pub fn balance(ledger: &Ledger, window: &BalanceWindow, clock: &dyn Clock) -> Decimal {
        balance(window, &ledger.transactions, clock.today())
    }

    /// Balance for a picker label and the two custom-range date pickers.
    pub fn balance_for_label(
        ledger: &Ledger,
        label: &str,
        start: NaiveDate,
        end: NaiveDate,
        clock: &dyn Clock,
    ) -> Decimal {
        let window = WindowKind::from_label(label).with_range(start, end);
        Self::balance(ledger, &window, clock)
    }

    pub fn summarize(ledger: &Ledger, window: &BalanceWindow, clock: &dyn Clock) -> WindowSummary {
        let today = clock.today();
        WindowSummary {
            kind: window.kind(),
            window: window.bounds(today),
            cashflow: cashflow(window, &ledger.transactions, today),
        }
    }

    /// Daily, weekly, monthly and yearly figures side by side.
    pub fn overview(ledger: &Ledger, clock: &dyn Clock) -> Vec<WindowSummary> {
        [
            BalanceWindow::Daily,
            BalanceWindow::Weekly,
            BalanceWindow::Monthly,
            BalanceWindow::Yearly,
        ]
        .iter()
        .map(|window| Self::summarize(ledger, window, clock))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Direction, RecurrencePeriod, Transaction};
    use crate::time::FixedClock;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ledger_with_weekly_expense() -> Ledger {
        let mut ledger = Ledger::new("Summary");
        ledger.add_transaction(
            Transaction::new("Groceries", dec!(50), Direction::Expense, date(2024, 1, 1))
                .with_recurrence(RecurrencePeriod::Weekly, date(2024, 12, 31)),
        );
        ledger.add_transaction(Transaction::new(
            "Salary",
            dec!(2000),
            Direction::Income,
            date(2024, 1, 10),
        ));
        ledger
    }

    #[test]
    fn overview_reports_each_named_window() {
        let ledger = ledger_with_weekly_expense();
        let clock = FixedClock(date(2024, 1, 10));
        let overview = SummaryService::overview(&ledger, &clock);
        let kinds: Vec<WindowKind> = overview.iter().map(|summary| summary.kind).collect();
        assert_eq!(
            kinds,
            vec![WindowKind::Daily, WindowKind::Weekly, WindowKind::Monthly, WindowKind::Yearly]
        );
        assert_eq!(overview[0].cashflow.net, dec!(2000));
        // Week of Mon 2024-01-08: one grocery run plus salary.
        assert_eq!(overview[1].cashflow.net, dec!(1950));
        assert_eq!(overview[1].window.start, date(2024, 1, 8));
        // January 2024 has five Mondays.
        assert_eq!(overview[2].cashflow.outflow, dec!(250));
    }

    #[test]
    fn unknown_label_falls_back_to_daily() {
        let ledger = ledger_with_weekly_expense();
        let clock = FixedClock(date(2024, 1, 8));
        let balance = SummaryService::balance_for_label(
            &ledger,
            "Fortnightly",
            date(2024, 1, 1),
            date(2024, 12, 31),
            &clock,
        );
        assert_eq!(balance, dec!(-50));
    }

    #[test]
    fn custom_label_uses_range() {
        let ledger = ledger_with_weekly_expense();
        let clock = FixedClock(date(2024, 1, 8));
        let balance = SummaryService::balance_for_label(
            &ledger,
            "Custom",
            date(2024, 1, 1),
            date(2024, 1, 14),
            &clock,
        );
        assert_eq!(balance, dec!(1900));
    }
}
