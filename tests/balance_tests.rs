mod common;

use budget_engine::ledger::{
    balance, cashflow, BalanceWindow, Direction, RecurrencePeriod, Transaction, WindowKind,
};
use common::{date, household_ledger, recurring};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn inverted_custom_window_falls_back_to_today() {
    let today = date(2024, 3, 7);
    let txns = vec![
        Transaction::new("Lunch", dec!(15), Direction::Expense, today),
        Transaction::new("Refund", dec!(30), Direction::Income, date(2024, 3, 6)),
    ];
    let window = BalanceWindow::Custom {
        start: date(2024, 3, 10),
        end: date(2024, 3, 5),
    };
    assert_eq!(balance(&window, &txns, today), dec!(-15));
    assert_eq!(window.bounds(today).days(), 1);
}

#[test]
fn single_day_custom_window_is_valid() {
    let day = date(2024, 3, 6);
    let txns = vec![Transaction::new("Refund", dec!(30), Direction::Income, day)];
    let window = WindowKind::Custom.with_range(day, day);
    assert_eq!(balance(&window, &txns, date(2024, 3, 1)), dec!(30));
}

#[test]
fn week_straddling_month_end_counts_both_sides() {
    // Wednesday 2024-07-31; the ISO week runs Mon 07-29 to Sun 08-04.
    let today = date(2024, 7, 31);
    let txns = vec![
        recurring(
            "Pay",
            dec!(100),
            Direction::Income,
            RecurrencePeriod::Weekly,
            date(2024, 7, 29),
            date(2024, 12, 31),
        ),
        Transaction::new("Dinner", dec!(40), Direction::Expense, date(2024, 8, 2)),
    ];
    assert_eq!(balance(&BalanceWindow::Weekly, &txns, today), dec!(60));
    assert_eq!(balance(&BalanceWindow::Monthly, &txns, today), dec!(100));
}

#[test]
fn week_spanning_new_year_stays_in_this_year() {
    // 2024-12-30 is a Monday; the week would run into 2025-01-05.
    let today = date(2024, 12, 31);
    let txns = vec![
        Transaction::new("Party", dec!(70), Direction::Expense, date(2024, 12, 31)),
        Transaction::new("Gift", dec!(50), Direction::Income, date(2025, 1, 2)),
    ];
    let bounds = BalanceWindow::Weekly.bounds(today);
    assert_eq!(bounds.start, date(2024, 12, 30));
    assert_eq!(bounds.end, date(2024, 12, 31));
    assert_eq!(balance(&BalanceWindow::Weekly, &txns, today), dec!(-70));
}

#[test]
fn cashflow_breaks_down_yearly_household() {
    let ledger = household_ledger();
    let flow = cashflow(&BalanceWindow::Yearly, &ledger.transactions, date(2024, 5, 1));

    // 26 pays, 1 refund; 12 rents, 53 Mondays of groceries.
    let inflow = dec!(3200) * Decimal::from(26) + dec!(640);
    let outflow = dec!(1800) * Decimal::from(12) + dec!(145.50) * Decimal::from(53);
    assert_eq!(flow.inflow, inflow);
    assert_eq!(flow.outflow, outflow);
    assert_eq!(flow.net, inflow - outflow);
    assert_eq!(flow.occurrences, 26 + 1 + 12 + 53);
    assert_eq!(
        balance(&BalanceWindow::Yearly, &ledger.transactions, date(2024, 5, 1)),
        flow.net
    );
}

#[test]
fn balance_is_additive_over_disjoint_sets() {
    let ledger = household_ledger();
    let today = date(2024, 7, 20);
    let (income, expenses): (Vec<_>, Vec<_>) = ledger
        .transactions
        .iter()
        .cloned()
        .partition(|txn| txn.direction == Direction::Income);
    for window in [
        BalanceWindow::Daily,
        BalanceWindow::Weekly,
        BalanceWindow::Monthly,
        BalanceWindow::Yearly,
    ] {
        assert_eq!(
            balance(&window, &ledger.transactions, today),
            balance(&window, &income, today) + balance(&window, &expenses, today),
            "window {:?}",
            window.kind()
        );
    }
}

#[test]
fn exact_decimal_sums_do_not_drift() {
    let today = date(2024, 1, 1);
    let txns = vec![recurring(
        "Coffee",
        dec!(0.10),
        Direction::Expense,
        RecurrencePeriod::Daily,
        today,
        date(2024, 12, 31),
    )];
    assert_eq!(balance(&BalanceWindow::Yearly, &txns, today), dec!(-36.60));
}
