use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::{EngineError, Result};

use super::balance::round_currency;
use super::goal::Goal;
use super::transaction::{Direction, Transaction, DEFAULT_CATEGORY};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Owns the transaction and goal collections. Edits replace whole records by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Ledger::schema_version_default")]
    pub schema_version: u8,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            transactions: Vec::new(),
            goals: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        info!(%id, name = %transaction.name, "transaction added");
        self.transactions.push(transaction);
        self.touch();
        id
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    /// Swaps in `transaction` for the stored record with the same id, returning the old one.
    pub fn replace_transaction(&mut self, transaction: Transaction) -> Result<Transaction> {
        let id = transaction.id;
        let slot = self
            .transactions
            .iter_mut()
            .find(|txn| txn.id == id)
            .ok_or(EngineError::TransactionNotFound(id))?;
        let previous = std::mem::replace(slot, transaction);
        info!(%id, "transaction replaced");
        self.touch();
        Ok(previous)
    }

    pub fn remove_transaction(&mut self, id: Uuid) -> Option<Transaction> {
        let idx = self.transactions.iter().position(|txn| txn.id == id)?;
        let removed = self.transactions.remove(idx);
        info!(%id, "transaction removed");
        self.touch();
        Some(removed)
    }

    pub fn add_goal(&mut self, goal: Goal) -> Uuid {
        let id = goal.id;
        info!(%id, name = %goal.name, "goal added");
        self.goals.push(goal);
        self.touch();
        id
    }

    pub fn goal(&self, id: Uuid) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    pub fn replace_goal(&mut self, goal: Goal) -> Result<Goal> {
        let id = goal.id;
        let slot = self
            .goals
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or(EngineError::GoalNotFound(id))?;
        let previous = std::mem::replace(slot, goal);
        info!(%id, "goal replaced");
        self.touch();
        Ok(previous)
    }

    /// Removes a goal. Contributions already booked as transactions stay in the ledger.
    pub fn remove_goal(&mut self, id: Uuid) -> Option<Goal> {
        let idx = self.goals.iter().position(|goal| goal.id == id)?;
        let removed = self.goals.remove(idx);
        info!(%id, "goal removed");
        self.touch();
        Some(removed)
    }

    /// Adds `amount` (rounded to cents) to a goal and books the matching expense on `date`.
    ///
    /// Returns the id of the new transaction. The goal and the ledger entry change
    /// together or not at all.
    pub fn contribute_to_goal(
        &mut self,
        goal_id: Uuid,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<Uuid> {
        let amount = round_currency(amount);
        if amount <= Decimal::ZERO {
            return Err(EngineError::InvalidInput(
                "contribution must be greater than zero".into(),
            ));
        }
        let goal = self
            .goals
            .iter_mut()
            .find(|goal| goal.id == goal_id)
            .ok_or(EngineError::GoalNotFound(goal_id))?;
        goal.contribute(amount);
        let entry = Transaction::new(
            format!("Contribution to {}", goal.name),
            amount,
            Direction::Expense,
            date,
        )
        .with_category(DEFAULT_CATEGORY);
        info!(goal = %goal_id, %amount, %date, "goal contribution booked");
        Ok(self.add_transaction(entry))
    }

    /// Re-expands any stored schedule that disagrees with its own recurrence fields.
    /// Returns the number of records rewritten.
    pub fn repair_schedules(&mut self) -> usize {
        let mut repaired = 0;
        for txn in &mut self.transactions {
            if txn.repair_schedule() {
                warn!(id = %txn.id, name = %txn.name, "stored schedule was inconsistent; re-expanded");
                repaired += 1;
            }
        }
        if repaired > 0 {
            self.touch();
        }
        repaired
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn goal_count(&self) -> usize {
        self.goals.len()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
