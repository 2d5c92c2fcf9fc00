//! Sorting and filtering of transaction and goal collections.
//!
//! Every operation returns a new vector and leaves the input untouched. Sorts are
//! stable, so records that compare equal keep their insertion order and re-sorting a
//! sorted list is a no-op.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::goal::Goal;
use super::transaction::{Direction, Transaction};

const LABEL_UNSORTED: &str = "None";
const LABEL_ALPHABETICAL: &str = "Name: A to Z";
const LABEL_REVERSE_ALPHABETICAL: &str = "Name: Z to A";
const LABELS_AMOUNT_ASCENDING: [&str; 2] = ["Amount: Low to high", "Total amount: Low to high"];
const LABELS_AMOUNT_DESCENDING: [&str; 2] = ["Amount: High to low", "Total amount: High to low"];
const LABEL_DATE_ASCENDING: &str = "Date: closest to furthest";
const LABEL_DATE_DESCENDING: &str = "Date: furthest to closest";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionOrder {
    Unsorted,
    Alphabetical,
    ReverseAlphabetical,
    AmountAscending,
    AmountDescending,
    #[default]
    DateAscending,
    DateDescending,
    Income,
    Expenses,
    Recurring,
    NotRecurring,
}

impl TransactionOrder {
    /// Maps a picker label; anything unknown sorts by next date, closest first.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        match label {
            LABEL_UNSORTED => TransactionOrder::Unsorted,
            LABEL_ALPHABETICAL => TransactionOrder::Alphabetical,
            LABEL_REVERSE_ALPHABETICAL => TransactionOrder::ReverseAlphabetical,
            LABEL_DATE_ASCENDING => TransactionOrder::DateAscending,
            LABEL_DATE_DESCENDING => TransactionOrder::DateDescending,
            "Income" => TransactionOrder::Income,
            "Expenses" => TransactionOrder::Expenses,
            "Recurring" => TransactionOrder::Recurring,
            "Non recurring" => TransactionOrder::NotRecurring,
            _ if LABELS_AMOUNT_ASCENDING.contains(&label) => TransactionOrder::AmountAscending,
            _ if LABELS_AMOUNT_DESCENDING.contains(&label) => TransactionOrder::AmountDescending,
            _ => TransactionOrder::default(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionOrder::Unsorted => LABEL_UNSORTED,
            TransactionOrder::Alphabetical => LABEL_ALPHABETICAL,
            TransactionOrder::ReverseAlphabetical => LABEL_REVERSE_ALPHABETICAL,
            TransactionOrder::AmountAscending => LABELS_AMOUNT_ASCENDING[0],
            TransactionOrder::AmountDescending => LABELS_AMOUNT_DESCENDING[0],
            TransactionOrder::DateAscending => LABEL_DATE_ASCENDING,
            TransactionOrder::DateDescending => LABEL_DATE_DESCENDING,
            TransactionOrder::Income => "Income",
            TransactionOrder::Expenses => "Expenses",
            TransactionOrder::Recurring => "Recurring",
            TransactionOrder::NotRecurring => "Non recurring",
        }
    }

    /// Filters shorten the list instead of reordering it.
    pub fn is_filter(&self) -> bool {
        matches!(
            self,
            TransactionOrder::Income
                | TransactionOrder::Expenses
                | TransactionOrder::Recurring
                | TransactionOrder::NotRecurring
        )
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GoalOrder {
    Unsorted,
    Alphabetical,
    ReverseAlphabetical,
    AmountAscending,
    AmountDescending,
    #[default]
    DateAscending,
    DateDescending,
    ContributedAscending,
    ContributedDescending,
    RemainingAscending,
    RemainingDescending,
}

impl GoalOrder {
    /// Maps a picker label; anything unknown sorts by due date, closest first.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        match label {
            LABEL_UNSORTED => GoalOrder::Unsorted,
            LABEL_ALPHABETICAL => GoalOrder::Alphabetical,
            LABEL_REVERSE_ALPHABETICAL => GoalOrder::ReverseAlphabetical,
            LABEL_DATE_ASCENDING => GoalOrder::DateAscending,
            LABEL_DATE_DESCENDING => GoalOrder::DateDescending,
            "Contributed: Low to high" => GoalOrder::ContributedAscending,
            "Contributed: High to low" => GoalOrder::ContributedDescending,
            "Remaining: Low to high" => GoalOrder::RemainingAscending,
            "Remaining: High to low" => GoalOrder::RemainingDescending,
            _ if LABELS_AMOUNT_ASCENDING.contains(&label) => GoalOrder::AmountAscending,
            _ if LABELS_AMOUNT_DESCENDING.contains(&label) => GoalOrder::AmountDescending,
            _ => GoalOrder::default(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GoalOrder::Unsorted => LABEL_UNSORTED,
            GoalOrder::Alphabetical => LABEL_ALPHABETICAL,
            GoalOrder::ReverseAlphabetical => LABEL_REVERSE_ALPHABETICAL,
            GoalOrder::AmountAscending => LABELS_AMOUNT_ASCENDING[1],
            GoalOrder::AmountDescending => LABELS_AMOUNT_DESCENDING[1],
            GoalOrder::DateAscending => LABEL_DATE_ASCENDING,
            GoalOrder::DateDescending => LABEL_DATE_DESCENDING,
            GoalOrder::ContributedAscending => "Contributed: Low to high",
            GoalOrder::ContributedDescending => "Contributed: High to low",
            GoalOrder::RemainingAscending => "Remaining: Low to high",
            GoalOrder::RemainingDescending => "Remaining: High to low",
        }
    }
}

/// Orders or filters transactions. Date orders use each transaction's next occurrence
/// relative to `today`; exhausted schedules sort as the far past.
pub fn order_transactions(
    order: TransactionOrder,
    items: &[Transaction],
    today: NaiveDate,
) -> Vec<Transaction> {
    let mut out = items.to_vec();
    match order {
        TransactionOrder::Unsorted => {}
        TransactionOrder::Alphabetical => out.sort_by(|a, b| a.name.cmp(&b.name)),
        TransactionOrder::ReverseAlphabetical => out.sort_by(|a, b| b.name.cmp(&a.name)),
        TransactionOrder::AmountAscending => out.sort_by(|a, b| a.amount.cmp(&b.amount)),
        TransactionOrder::AmountDescending => out.sort_by(|a, b| b.amount.cmp(&a.amount)),
        TransactionOrder::DateAscending => {
            out.sort_by_cached_key(|txn| txn.next_occurrence_date(today))
        }
        TransactionOrder::DateDescending => out.sort_by(|a, b| {
            b.next_occurrence_date(today)
                .cmp(&a.next_occurrence_date(today))
        }),
        TransactionOrder::Income => out.retain(|txn| txn.direction == Direction::Income),
        TransactionOrder::Expenses => out.retain(|txn| txn.direction == Direction::Expense),
        TransactionOrder::Recurring => out.retain(Transaction::is_recurring),
        TransactionOrder::NotRecurring => out.retain(|txn| !txn.is_recurring()),
    }
    out
}

pub fn order_goals(order: GoalOrder, items: &[Goal]) -> Vec<Goal> {
    let mut out = items.to_vec();
    match order {
        GoalOrder::Unsorted => {}
        GoalOrder::Alphabetical => out.sort_by(|a, b| a.name.cmp(&b.name)),
        GoalOrder::ReverseAlphabetical => out.sort_by(|a, b| b.name.cmp(&a.name)),
        GoalOrder::AmountAscending => out.sort_by(|a, b| a.target.cmp(&b.target)),
        GoalOrder::AmountDescending => out.sort_by(|a, b| b.target.cmp(&a.target)),
        GoalOrder::DateAscending => out.sort_by_key(|goal| goal.due_date),
        GoalOrder::DateDescending => out.sort_by(|a, b| b.due_date.cmp(&a.due_date)),
        GoalOrder::ContributedAscending => out.sort_by(|a, b| a.contributed.cmp(&b.contributed)),
        GoalOrder::ContributedDescending => {
            out.sort_by(|a, b| b.contributed.cmp(&a.contributed))
        }
        GoalOrder::RemainingAscending => out.sort_by_key(Goal::remaining),
        GoalOrder::RemainingDescending => out.sort_by(|a, b| b.remaining().cmp(&a.remaining())),
    }
    out
}
