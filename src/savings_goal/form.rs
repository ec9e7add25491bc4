use serde::{Deserialize, Serialize};
use time::{Date, Duration};

use crate::{Error, format::iso_date, savings_goal::NewSavingsGoal};

/// How far away the deadline of a new goal is if none is given.
pub const DEFAULT_DEADLINE: Duration = Duration::days(365);

/// The form data for creating or editing a savings goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalForm {
    #[serde(default)]
    pub title: String,
    pub target_amount: f64,
    /// Defaults to a year from today.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_deadline",
        deserialize_with = "iso_date::deserialize_option"
    )]
    pub deadline: Option<Date>,
}

fn serialize_deadline<S: serde::Serializer>(
    deadline: &Option<Date>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match deadline {
        Some(date) => iso_date::serialize(date, serializer),
        None => serializer.serialize_none(),
    }
}

impl GoalForm {
    /// Check the form and convert it into a goal with nothing saved yet.
    ///
    /// # Errors
    /// Returns [Error::EmptyField] if the title is blank and
    /// [Error::InvalidAmount] if the target is not a positive number.
    pub fn validate(self, today: Date) -> Result<NewSavingsGoal, Error> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(Error::EmptyField("title"));
        }

        if !self.target_amount.is_finite() || self.target_amount <= 0.0 {
            return Err(Error::InvalidAmount);
        }

        let deadline = match self.deadline {
            Some(deadline) => deadline,
            None => today.saturating_add(DEFAULT_DEADLINE),
        };

        Ok(NewSavingsGoal {
            title: title.to_owned(),
            target_amount: self.target_amount,
            current_amount: 0.0,
            deadline,
        })
    }
}

/// The form data for adding money to a savings goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionForm {
    pub amount: f64,
}

impl ContributionForm {
    /// The amount to add to the goal.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if the amount is not a positive number.
    pub fn validate(self) -> Result<f64, Error> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(Error::InvalidAmount);
        }

        Ok(self.amount)
    }
}
