//! Business logic helpers for managing transactions.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::Config;
use crate::core::services::{ServiceError, ServiceResult};
use crate::errors::EngineError;
use crate::ledger::transaction::DEFAULT_CATEGORY;
use crate::ledger::{
    never_ending_end_date, order_transactions, round_currency, Direction, Ledger,
    RecurrencePeriod, Transaction, TransactionOrder,
};
use crate::time::{offset_days, Clock};

/// User input for a new or edited transaction, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub name: String,
    pub amount: Decimal,
    pub direction: Direction,
    pub category: String,
    pub period: RecurrencePeriod,
    pub due_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    /// Pushes the end date out by the configured number of years.
    pub never_ending: bool,
}

impl TransactionDraft {
    pub fn new(
        name: impl Into<String>,
        amount: Decimal,
        direction: Direction,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            direction,
            category: DEFAULT_CATEGORY.into(),
            period: RecurrencePeriod::None,
            due_date,
            end_date: None,
            never_ending: false,
        }
    }

    /// Builds a draft from the raw form strings. Unknown direction and period labels
    /// fall back to `Expense` and a one-off schedule.
    pub fn from_form(
        name: &str,
        amount: &str,
        direction: &str,
        period: &str,
        category: &str,
        due_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> ServiceResult<Self> {
        Ok(Self {
            name: name.to_string(),
            amount: parse_amount(amount)?,
            direction: Direction::from_label(direction),
            category: category.to_string(),
            period: RecurrencePeriod::from_label(period),
            due_date,
            end_date,
            never_ending: false,
        })
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn recurring(mut self, period: RecurrencePeriod, end_date: NaiveDate) -> Self {
        self.period = period;
        self.end_date = Some(end_date);
        self
    }

    pub fn never_ending(mut self, period: RecurrencePeriod) -> Self {
        self.period = period;
        self.never_ending = true;
        self
    }

    fn resolved_end_date(&self, config: &Config) -> NaiveDate {
        if !self.period.is_recurring() {
            return self.due_date;
        }
        if self.never_ending {
            let base = self
                .end_date
                .or_else(|| self.due_date.succ_opt())
                .unwrap_or(self.due_date);
            return never_ending_end_date(base, config.never_ending_years);
        }
        self.end_date.unwrap_or(self.due_date)
    }

    fn validate(&self, end_date: NaiveDate, config: &Config, today: NaiveDate) -> ServiceResult<()> {
        if self.name.trim().is_empty() {
            return Err(ServiceError::Invalid("Transaction name is required".into()));
        }
        if self.category.trim().is_empty() {
            return Err(ServiceError::Invalid("Category is required".into()));
        }
        if self.amount < Decimal::ZERO {
            return Err(ServiceError::Invalid("Amount cannot be negative".into()));
        }
        if self.period.is_recurring() {
            if end_date <= self.due_date {
                return Err(ServiceError::Invalid(
                    "End date must be after the due date".into(),
                ));
            }
            let horizon = offset_days(today, config.max_horizon_days).unwrap_or(NaiveDate::MAX);
            if end_date > horizon {
                return Err(ServiceError::Invalid(format!(
                    "End date must be on or before {horizon}"
                )));
            }
        }
        Ok(())
    }

    /// Validates the draft and expands it into a transaction.
    pub fn build(&self, config: &Config, today: NaiveDate) -> ServiceResult<Transaction> {
        let end_date = self.resolved_end_date(config);
        self.validate(end_date, config, today)?;
        let txn = Transaction::new(
            self.name.trim(),
            round_currency(self.amount),
            self.direction,
            self.due_date,
        )
        .with_category(self.category.trim())
        .with_recurrence(self.period, end_date);
        Ok(txn)
    }
}

/// Parses a typed amount. Blank, non-numeric and negative input is rejected.
pub fn parse_amount(raw: &str) -> ServiceResult<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::Invalid("Amount is required".into()));
    }
    let amount = Decimal::from_str(trimmed)
        .map_err(|_| ServiceError::Invalid(format!("`{trimmed}` is not a valid amount")))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ServiceError::Invalid("Amount cannot be negative".into()));
    }
    Ok(round_currency(amount))
}

/// Provides validated CRUD helpers for ledger transactions.
pub struct TransactionService;

impl TransactionService {
    /// Adds a new transaction and returns its identifier.
    pub fn add(
        ledger: &mut Ledger,
        draft: &TransactionDraft,
        config: &Config,
        clock: &dyn Clock,
    ) -> ServiceResult<Uuid> {
        let txn = draft.build(config, clock.today())?;
        Ok(ledger.add_transaction(txn))
    }

    /// Replaces the transaction identified by `id`, returning the previous record.
    pub fn update(
        ledger: &mut Ledger,
        id: Uuid,
        draft: &TransactionDraft,
        config: &Config,
        clock: &dyn Clock,
    ) -> ServiceResult<Transaction> {
        let mut txn = draft.build(config, clock.today())?;
        txn.id = id;
        Ok(ledger.replace_transaction(txn)?)
    }

    /// Removes the transaction identified by `id`, returning the removed instance.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<Transaction> {
        ledger
            .remove_transaction(id)
            .ok_or_else(|| EngineError::TransactionNotFound(id).into())
    }

    /// Returns the ledger's transactions in the requested order.
    pub fn list(ledger: &Ledger, order: TransactionOrder, clock: &dyn Clock) -> Vec<Transaction> {
        order_transactions(order, &ledger.transactions, clock.today())
    }

    pub fn list_by_label(ledger: &Ledger, label: &str, clock: &dyn Clock) -> Vec<Transaction> {
        Self::list(ledger, TransactionOrder::from_label(label), clock)
    }
}
