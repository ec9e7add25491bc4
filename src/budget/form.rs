use serde::{Deserialize, Serialize};

use crate::{Error, budget::NewBudget, month::MonthKey};

/// The form data for setting a monthly budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetForm {
    /// The name of the expense category to limit.
    #[serde(default)]
    pub category: String,
    /// The most that should be spent in the month.
    pub monthly_limit: f64,
    /// The month the limit applies to, defaults to the current month.
    #[serde(default)]
    pub month: Option<MonthKey>,
}

impl BudgetForm {
    /// Check the form and convert it into a budget ready to be stored.
    ///
    /// The year of the budget is taken from its month.
    ///
    /// # Errors
    /// Returns [Error::EmptyField] if the category is blank and
    /// [Error::InvalidAmount] if the limit is not a positive number.
    pub fn validate(self, current_month: MonthKey) -> Result<NewBudget, Error> {
        let category = self.category.trim();
        if category.is_empty() {
            return Err(Error::EmptyField("category"));
        }

        if !self.monthly_limit.is_finite() || self.monthly_limit <= 0.0 {
            return Err(Error::InvalidAmount);
        }

        let month = self.month.unwrap_or(current_month);

        Ok(NewBudget {
            category: category.to_owned(),
            monthly_limit: self.monthly_limit,
            month,
            year: month.year(),
        })
    }
}
