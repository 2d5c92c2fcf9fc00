//! Signed aggregation of transaction occurrences over a window.
//!
//! Sums are exact decimals; rounding for display is left to the caller
//! ([`round_currency`]).

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::recurring::occurrences_within;
use super::transaction::{Direction, Transaction};
use super::window::BalanceWindow;

/// Inflow/outflow breakdown of a window.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cashflow {
    pub inflow: Decimal,
    pub outflow: Decimal,
    pub net: Decimal,
    pub occurrences: usize,
}

impl Cashflow {
    fn record(&mut self, direction: Direction, amount: Decimal, count: usize) {
        let total = amount * Decimal::from(count);
        match direction {
            Direction::Income => self.inflow += total,
            Direction::Expense => self.outflow += total,
        }
        self.net += direction.signed(total);
        self.occurrences += count;
    }
}

/// Net signed amount of every occurrence falling inside `window`.
pub fn balance(window: &BalanceWindow, transactions: &[Transaction], today: NaiveDate) -> Decimal {
    cashflow(window, transactions, today).net
}

pub fn cashflow(window: &BalanceWindow, transactions: &[Transaction], today: NaiveDate) -> Cashflow {
    let bounds = window.bounds(today);
    let mut flow = Cashflow::default();
    for txn in transactions {
        let hits = occurrences_within(txn.occurrences(), bounds.start, bounds.end).len();
        if hits > 0 {
            flow.record(txn.direction, txn.amount, hits);
        }
    }
    flow
}

/// Rounds to cents, halves away from zero.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::period::RecurrencePeriod;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::new("Pay", dec!(100), Direction::Income, date(2024, 3, 4))
                .with_recurrence(RecurrencePeriod::Weekly, date(2024, 12, 31)),
            Transaction::new("Phone", dec!(40), Direction::Expense, date(2024, 2, 28))
                .with_recurrence(RecurrencePeriod::Monthly, date(2024, 12, 31)),
            Transaction::new("Lunch", dec!(12.35), Direction::Expense, date(2024, 3, 13)),
        ]
    }

    #[test]
    fn daily_counts_only_today() {
        let today = date(2024, 3, 13);
        assert_eq!(balance(&BalanceWindow::Daily, &sample(), today), dec!(-12.35));
        assert_eq!(balance(&BalanceWindow::Daily, &sample(), date(2024, 3, 11)), dec!(100));
    }

    #[test]
    fn monthly_counts_every_occurrence_in_the_month() {
        // March 2024 has paydays on the 4th, 11th, 18th and 25th.
        let flow = cashflow(&BalanceWindow::Monthly, &sample(), date(2024, 3, 13));
        assert_eq!(flow.inflow, dec!(400));
        assert_eq!(flow.outflow, dec!(52.35));
        assert_eq!(flow.net, dec!(347.65));
        assert_eq!(flow.occurrences, 6);
    }

    #[test]
    fn custom_window_is_inclusive() {
        let window = BalanceWindow::Custom {
            start: date(2024, 3, 4),
            end: date(2024, 3, 11),
        };
        assert_eq!(balance(&window, &sample(), date(2024, 1, 1)), dec!(200));
    }

    #[test]
    fn inverted_custom_window_reads_today_only() {
        let window = BalanceWindow::Custom {
            start: date(2024, 3, 10),
            end: date(2024, 3, 5),
        };
        let today = date(2024, 3, 18);
        assert_eq!(balance(&window, &sample(), today), dec!(100));
    }

    #[test]
    fn empty_collection_balances_to_zero() {
        assert_eq!(
            balance(&BalanceWindow::Yearly, &[], date(2024, 1, 1)),
            Decimal::ZERO
        );
    }

    #[test]
    fn round_currency_rounds_halves_away_from_zero() {
        assert_eq!(round_currency(dec!(2.345)), dec!(2.35));
        assert_eq!(round_currency(dec!(-2.345)), dec!(-2.35));
        assert_eq!(round_currency(dec!(2.344)), dec!(2.34));
    }
}
