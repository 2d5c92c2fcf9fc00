//! Validated entry points used by front ends. Services own no state: every call takes
//! the [`Ledger`](crate::ledger::Ledger) it works on plus the clock and config it needs.

pub mod goal_service;
pub mod summary_service;
pub mod transaction_service;

pub use goal_service::{GoalDraft, GoalService};
pub use summary_service::{SummaryService, WindowSummary};
pub use transaction_service::{parse_amount, TransactionDraft, TransactionService};

use crate::errors::EngineError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("{0}")]
    Invalid(String),
}
