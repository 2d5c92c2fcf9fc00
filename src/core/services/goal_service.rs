//! Goal management: validated add/edit, contributions, and feasibility.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::Config;
use crate::core::services::{ServiceError, ServiceResult};
use crate::errors::EngineError;
use crate::ledger::transaction::DEFAULT_CATEGORY;
use crate::ledger::{assess, order_goals, round_currency, Feasibility, Goal, GoalOrder, Ledger};
use crate::time::{offset_days, Clock};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalDraft {
    pub name: String,
    pub target: Decimal,
    pub contributed: Decimal,
    pub due_date: NaiveDate,
    pub category: String,
}

impl GoalDraft {
    pub fn new(name: impl Into<String>, target: Decimal, due_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            target,
            contributed: Decimal::ZERO,
            due_date,
            category: DEFAULT_CATEGORY.into(),
        }
    }

    pub fn with_contributed(mut self, contributed: Decimal) -> Self {
        self.contributed = contributed;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    fn validate(&self, today: NaiveDate) -> ServiceResult<()> {
        if self.name.trim().is_empty() {
            return Err(ServiceError::Invalid("Goal name is required".into()));
        }
        if self.category.trim().is_empty() {
            return Err(ServiceError::Invalid("Category is required".into()));
        }
        if self.target < Decimal::ZERO || self.contributed < Decimal::ZERO {
            return Err(ServiceError::Invalid(
                "Goal amounts cannot be negative".into(),
            ));
        }
        if self.due_date == today {
            return Err(ServiceError::Invalid("Goal cannot be due today".into()));
        }
        Ok(())
    }

    pub fn build(&self, today: NaiveDate) -> ServiceResult<Goal> {
        self.validate(today)?;
        Ok(Goal::new(self.name.trim(), round_currency(self.target), self.due_date)
            .with_contributed(round_currency(self.contributed))
            .with_category(self.category.trim()))
    }
}

pub struct GoalService;

impl GoalService {
    pub fn add(ledger: &mut Ledger, draft: &GoalDraft, clock: &dyn Clock) -> ServiceResult<Uuid> {
        let goal = draft.build(clock.today())?;
        Ok(ledger.add_goal(goal))
    }

    /// Replaces the goal identified by `id`, returning the previous record.
    pub fn update(
        ledger: &mut Ledger,
        id: Uuid,
        draft: &GoalDraft,
        clock: &dyn Clock,
    ) -> ServiceResult<Goal> {
        let mut goal = draft.build(clock.today())?;
        goal.id = id;
        Ok(ledger.replace_goal(goal)?)
    }

    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<Goal> {
        ledger
            .remove_goal(id)
            .ok_or_else(|| EngineError::GoalNotFound(id).into())
    }

    /// Books a contribution dated today; returns the id of the mirrored expense.
    pub fn contribute(
        ledger: &mut Ledger,
        id: Uuid,
        amount: Decimal,
        clock: &dyn Clock,
    ) -> ServiceResult<Uuid> {
        Ok(ledger.contribute_to_goal(id, amount, clock.today())?)
    }

    pub fn feasibility(ledger: &Ledger, id: Uuid, clock: &dyn Clock) -> ServiceResult<Feasibility> {
        let goal = ledger.goal(id).ok_or(EngineError::GoalNotFound(id))?;
        Ok(assess(goal, &ledger.transactions, clock.today()))
    }

    /// Scores a goal that has not been added yet.
    pub fn preview(ledger: &Ledger, draft: &GoalDraft, clock: &dyn Clock) -> ServiceResult<Feasibility> {
        let today = clock.today();
        let goal = draft.build(today)?;
        Ok(assess(&goal, &ledger.transactions, today))
    }

    pub fn list(ledger: &Ledger, order: GoalOrder) -> Vec<Goal> {
        order_goals(order, &ledger.goals)
    }

    pub fn list_by_label(ledger: &Ledger, label: &str) -> Vec<Goal> {
        Self::list(ledger, GoalOrder::from_label(label))
    }

    /// Initial due date offered for a new goal.
    pub fn suggested_due_date(config: &Config, clock: &dyn Clock) -> ServiceResult<NaiveDate> {
        offset_days(clock.today(), config.default_goal_days).ok_or_else(|| {
            EngineError::InvalidInput(format!(
                "default_goal_days {} is outside the calendar",
                config.default_goal_days
            ))
            .into()
        })
    }
}
