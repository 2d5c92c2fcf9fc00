use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::period::RecurrencePeriod;
use super::recurring;

/// Next-date stand-in for a transaction with no occurrence left; sorts before any real date.
pub const EXHAUSTED_SENTINEL: NaiveDate = NaiveDate::MIN;

pub const DEFAULT_CATEGORY: &str = "Other";

/// Whether money comes in or goes out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    Income,
    Expense,
}

impl Direction {
    /// Applies the sign convention: income adds, expense subtracts.
    pub fn signed(&self, amount: Decimal) -> Decimal {
        match self {
            Direction::Income => amount,
            Direction::Expense => -amount,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Income => "Income",
            Direction::Expense => "Expense",
        }
    }

    /// Anything other than "Income" is an expense.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("income") {
            Direction::Income
        } else {
            Direction::Expense
        }
    }
}

/// A single or recurring cash movement together with its expanded schedule.
///
/// The schedule fields are private: `occurrences` is only ever produced by
/// [`recurring::expand`], so it is ascending, starts at `due_date`, and never passes
/// `end_date`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: Uuid,
    pub name: String,
    pub amount: Decimal,
    period: RecurrencePeriod,
    due_date: NaiveDate,
    end_date: NaiveDate,
    occurrences: Vec<NaiveDate>,
    pub category: String,
    pub direction: Direction,
}

impl Transaction {
    /// Creates a one-off transaction on `due_date`.
    pub fn new(
        name: impl Into<String>,
        amount: Decimal,
        direction: Direction,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            period: RecurrencePeriod::None,
            due_date,
            end_date: due_date,
            occurrences: vec![due_date],
            category: DEFAULT_CATEGORY.into(),
            direction,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_recurrence(mut self, period: RecurrencePeriod, end_date: NaiveDate) -> Self {
        self.reschedule(period, self.due_date, end_date);
        self
    }

    /// Replaces the schedule and re-expands the occurrence dates.
    pub fn reschedule(&mut self, period: RecurrencePeriod, due_date: NaiveDate, end_date: NaiveDate) {
        self.period = period;
        self.due_date = due_date;
        self.end_date = if period.is_recurring() {
            end_date
        } else {
            due_date
        };
        self.occurrences = recurring::expand(due_date, period, self.end_date);
    }

    pub fn period(&self) -> RecurrencePeriod {
        self.period
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn occurrences(&self) -> &[NaiveDate] {
        &self.occurrences
    }

    pub fn is_recurring(&self) -> bool {
        self.period.is_recurring()
    }

    pub fn signed_amount(&self) -> Decimal {
        self.direction.signed(self.amount)
    }

    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        recurring::next_occurrence(&self.occurrences, today)
    }

    /// Next occurrence on or after `today`, or [`EXHAUSTED_SENTINEL`] once none remain.
    pub fn next_occurrence_date(&self, today: NaiveDate) -> NaiveDate {
        self.next_occurrence(today).unwrap_or(EXHAUSTED_SENTINEL)
    }

    /// Position of the next occurrence within the schedule.
    pub fn next_occurrence_index(&self, today: NaiveDate) -> Option<usize> {
        let idx = self.occurrences.partition_point(|date| *date < today);
        (idx < self.occurrences.len()).then_some(idx)
    }

    /// Whether the stored occurrences match a fresh expansion of the schedule.
    pub fn schedule_is_consistent(&self) -> bool {
        self.occurrences == recurring::expand(self.due_date, self.period, self.end_date)
    }

    /// Re-expands the stored schedule, returning whether the occurrence list changed.
    pub fn repair_schedule(&mut self) -> bool {
        let expanded = recurring::expand(self.due_date, self.period, self.end_date);
        if expanded == self.occurrences {
            return false;
        }
        self.occurrences = expanded;
        true
    }
}
