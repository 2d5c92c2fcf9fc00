//! Ledger records, recurrence expansion, aggregation, and ordering.

pub mod balance;
pub mod feasibility;
pub mod goal;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod ordering;
pub mod period;
pub mod recurring;
pub mod transaction;
pub mod window;

pub use balance::{balance, cashflow, round_currency, Cashflow};
pub use feasibility::{assess, feasibility_score, Feasibility, FeasibilityRating};
pub use goal::Goal;
pub use ledger::Ledger;
pub use ordering::{order_goals, order_transactions, GoalOrder, TransactionOrder};
pub use period::RecurrencePeriod;
pub use recurring::{expand, never_ending_end_date, next_occurrence, MAX_OCCURRENCES};
pub use transaction::{Direction, Transaction, EXHAUSTED_SENTINEL};
pub use window::{BalanceWindow, DateWindow, WindowKind};
