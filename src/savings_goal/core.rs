//! Defines the savings goal model.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{database_id::SavingsGoalId, format::iso_date, store::Record};

/// An amount of money to save by a deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    /// The ID of the goal.
    pub id: SavingsGoalId,
    /// What the money is being saved for, e.g. "Emergency fund".
    pub title: String,
    /// The amount to save.
    pub target_amount: f64,
    /// The amount saved so far, never negative.
    pub current_amount: f64,
    /// The date by which the target should be reached.
    #[serde(with = "iso_date")]
    pub deadline: Date,
    /// When the goal was set.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl SavingsGoal {
    /// Add `delta` to the amount saved, which may be negative for a withdrawal.
    ///
    /// The amount saved never drops below zero, there is no upper limit.
    pub fn contribute(&mut self, delta: f64) {
        self.current_amount = (self.current_amount + delta).max(0.0);
    }
}

impl Record for SavingsGoal {
    fn id(&self) -> SavingsGoalId {
        self.id
    }
}

/// The data needed to create a new savings goal.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSavingsGoal {
    pub title: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: Date,
}

impl NewSavingsGoal {
    /// Attach an ID and creation time to create the stored [SavingsGoal].
    pub fn finalize(self, id: SavingsGoalId, created_at: OffsetDateTime) -> SavingsGoal {
        SavingsGoal {
            id,
            title: self.title,
            target_amount: self.target_amount,
            current_amount: self.current_amount,
            deadline: self.deadline,
            created_at,
        }
    }
}

/// A partial update to a [SavingsGoal].
///
/// The amount saved is changed through contributions instead.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoalPatch {
    /// The goal title.
    pub title: Option<String>,
    /// The amount to save.
    pub target_amount: Option<f64>,
    /// The date to reach the target by.
    #[serde(default, deserialize_with = "iso_date::deserialize_option")]
    pub deadline: Option<Date>,
}

impl SavingsGoalPatch {
    /// Overwrite the fields of `goal` that are set in this patch.
    pub fn apply(self, goal: &mut SavingsGoal) {
        if let Some(title) = self.title {
            goal.title = title;
        }
        if let Some(target_amount) = self.target_amount {
            goal.target_amount = target_amount;
        }
        if let Some(deadline) = self.deadline {
            goal.deadline = deadline;
        }
    }
}

impl From<NewSavingsGoal> for SavingsGoalPatch {
    fn from(value: NewSavingsGoal) -> Self {
        Self {
            title: Some(value.title),
            target_amount: Some(value.target_amount),
            deadline: Some(value.deadline),
        }
    }
}
