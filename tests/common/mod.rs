#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use budget_engine::{
    config::ConfigManager,
    ledger::{Direction, Goal, Ledger, RecurrencePeriod, Transaction},
    storage::JsonStorage,
    time::FixedClock,
};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Storage and config rooted in a fresh temporary directory.
pub fn setup_test_env() -> (JsonStorage, ConfigManager, PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let storage = JsonStorage::new(Some(base.clone())).expect("create json storage backend");
    let config = ConfigManager::with_base_dir(base.clone()).expect("create config manager");
    (storage, config, base)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

pub fn clock(y: i32, m: u32, d: u32) -> FixedClock {
    FixedClock(date(y, m, d))
}

pub fn recurring(
    name: &str,
    amount: Decimal,
    direction: Direction,
    period: RecurrencePeriod,
    start: NaiveDate,
    end: NaiveDate,
) -> Transaction {
    Transaction::new(name, amount, direction, start).with_recurrence(period, end)
}

/// Salary, rent, groceries, a one-off refund, and two goals across 2024.
pub fn household_ledger() -> Ledger {
    let mut ledger = Ledger::new("Household");
    ledger.add_transaction(recurring(
        "Salary",
        Decimal::new(3200, 0),
        Direction::Income,
        RecurrencePeriod::Fortnightly,
        date(2024, 1, 5),
        date(2024, 12, 31),
    ));
    ledger.add_transaction(
        recurring(
            "Rent",
            Decimal::new(1800, 0),
            Direction::Expense,
            RecurrencePeriod::Monthly,
            date(2024, 1, 31),
            date(2024, 12, 31),
        )
        .with_category("Rent"),
    );
    ledger.add_transaction(
        recurring(
            "Groceries",
            Decimal::new(14550, 2),
            Direction::Expense,
            RecurrencePeriod::Weekly,
            date(2024, 1, 1),
            date(2024, 12, 31),
        )
        .with_category("Food"),
    );
    ledger.add_transaction(Transaction::new(
        "Tax refund",
        Decimal::new(640, 0),
        Direction::Income,
        date(2024, 7, 20),
    ));
    ledger.add_goal(Goal::new("Holiday", Decimal::new(4000, 0), date(2024, 12, 1)));
    ledger.add_goal(
        Goal::new("Laptop", Decimal::new(2500, 0), date(2024, 9, 1))
            .with_contributed(Decimal::new(600, 0)),
    );
    ledger
}
