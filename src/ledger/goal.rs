use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::transaction::DEFAULT_CATEGORY;

/// A savings target with a due date and a running contributed total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Goal {
    pub id: Uuid,
    pub name: String,
    pub due_date: NaiveDate,
    pub target: Decimal,
    pub contributed: Decimal,
    pub category: String,
}

impl Goal {
    pub fn new(name: impl Into<String>, target: Decimal, due_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            due_date,
            target,
            contributed: Decimal::ZERO,
            category: DEFAULT_CATEGORY.into(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_contributed(mut self, contributed: Decimal) -> Self {
        self.contributed = contributed;
        self
    }

    pub fn is_achieved(&self) -> bool {
        self.contributed >= self.target
    }

    /// `target - contributed`; negative once the goal has been overshot.
    pub fn remaining(&self) -> Decimal {
        self.target - self.contributed
    }

    pub fn contribute(&mut self, amount: Decimal) {
        self.contributed += amount;
    }
}
