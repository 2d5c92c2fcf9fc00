//! Goal feasibility: how comfortably projected cashflow covers what is left to save.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::balance::{balance, round_currency};
use super::goal::Goal;
use super::transaction::Transaction;
use super::window::BalanceWindow;

/// Score bands, best first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FeasibilityRating {
    ExtremelyAchievable,
    VeryAchievable,
    QuiteAchievable,
    Achievable,
    NeedsMostSavings,
    Difficult,
    Unrealistic,
    NeedsPositiveBalance,
}

impl FeasibilityRating {
    pub fn from_score(score: Option<Decimal>) -> Self {
        let Some(score) = score else {
            return FeasibilityRating::NeedsPositiveBalance;
        };
        let ten = Decimal::TEN;
        let five = Decimal::new(5, 0);
        let three = Decimal::new(3, 0);
        let one_and_half = Decimal::new(15, 1);
        let half = Decimal::new(5, 1);

        if score > ten {
            FeasibilityRating::ExtremelyAchievable
        } else if score > five {
            FeasibilityRating::VeryAchievable
        } else if score > three {
            FeasibilityRating::QuiteAchievable
        } else if score > one_and_half {
            FeasibilityRating::Achievable
        } else if score >= Decimal::ONE {
            FeasibilityRating::NeedsMostSavings
        } else if score >= half {
            FeasibilityRating::Difficult
        } else if score > Decimal::ZERO {
            FeasibilityRating::Unrealistic
        } else {
            FeasibilityRating::NeedsPositiveBalance
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FeasibilityRating::ExtremelyAchievable => "This goal is extremely achievable",
            FeasibilityRating::VeryAchievable => "This goal is very achievable",
            FeasibilityRating::QuiteAchievable => "This goal is quite achievable",
            FeasibilityRating::Achievable => "This goal is achievable",
            FeasibilityRating::NeedsMostSavings => {
                "This goal is achievable provided you contribute the majority of your savings to it"
            }
            FeasibilityRating::Difficult => {
                "This goal may be difficult to achieve if you don't change your spending habits"
            }
            FeasibilityRating::Unrealistic => {
                "This may be an unrealistic goal for you to set. Consider changing your spending \
                 habits or increasing the timeframe available to achieve this goal"
            }
            FeasibilityRating::NeedsPositiveBalance => {
                "Try to achieve a positive balance in this timeframe before you set goals"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feasibility {
    pub balance: Decimal,
    pub remaining: Decimal,
    pub score: Option<Decimal>,
    pub rating: FeasibilityRating,
}

/// `balance / remaining` rounded to two places.
///
/// A negative balance inverts the ratio (`remaining / balance`). The result is
/// discontinuous around zero; callers rely on the inverted figure, so it stays.
/// `None` when `remaining` is zero.
pub fn feasibility_score(balance: Decimal, remaining: Decimal) -> Option<Decimal> {
    let ratio = balance.checked_div(remaining)?;
    let score = if balance < Decimal::ZERO {
        Decimal::ONE.checked_div(ratio)?
    } else {
        ratio
    };
    Some(round_currency(score))
}

/// Scores `goal` against the cashflow between `today` and its due date.
pub fn assess(goal: &Goal, transactions: &[Transaction], today: NaiveDate) -> Feasibility {
    let window = BalanceWindow::Custom {
        start: today,
        end: goal.due_date,
    };
    let projected = balance(&window, transactions, today);
    let remaining = goal.remaining();
    let score = feasibility_score(projected, remaining);
    Feasibility {
        balance: projected,
        remaining,
        score,
        rating: FeasibilityRating::from_score(score),
    }
}
