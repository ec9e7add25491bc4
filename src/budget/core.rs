//! Defines the budget model.

use serde::{Deserialize, Serialize};

use crate::{database_id::BudgetId, month::MonthKey, store::Record};

/// A spending limit for one category in one month.
///
/// There is at most one budget for each category, month and year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// The ID of the budget.
    pub id: BudgetId,
    /// The name of the expense category the limit applies to.
    pub category: String,
    /// The most that should be spent in the category during the month.
    pub monthly_limit: f64,
    /// The month the limit applies to, e.g. "2024-06".
    pub month: MonthKey,
    /// The year of `month`.
    pub year: i32,
}

impl Budget {
    /// Whether this budget is for `category` in `month` of `year`.
    pub fn matches_key(&self, category: &str, month: MonthKey, year: i32) -> bool {
        self.category == category && self.month == month && self.year == year
    }
}

impl Record for Budget {
    fn id(&self) -> BudgetId {
        self.id
    }
}

/// The data needed to create a new budget.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    pub category: String,
    pub monthly_limit: f64,
    pub month: MonthKey,
    pub year: i32,
}

impl NewBudget {
    /// Attach an ID to create the stored [Budget].
    pub fn finalize(self, id: BudgetId) -> Budget {
        Budget {
            id,
            category: self.category,
            monthly_limit: self.monthly_limit,
            month: self.month,
            year: self.year,
        }
    }
}

/// A partial update to a [Budget].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPatch {
    /// The category name.
    pub category: Option<String>,
    /// The spending limit.
    pub monthly_limit: Option<f64>,
    /// The month, e.g. "2024-06".
    pub month: Option<MonthKey>,
    /// The year of the month.
    pub year: Option<i32>,
}

impl BudgetPatch {
    /// Overwrite the fields of `budget` that are set in this patch.
    pub fn apply(self, budget: &mut Budget) {
        if let Some(category) = self.category {
            budget.category = category;
        }
        if let Some(monthly_limit) = self.monthly_limit {
            budget.monthly_limit = monthly_limit;
        }
        if let Some(month) = self.month {
            budget.month = month;
        }
        if let Some(year) = self.year {
            budget.year = year;
        }
    }
}

impl From<NewBudget> for BudgetPatch {
    fn from(value: NewBudget) -> Self {
        Self {
            category: Some(value.category),
            monthly_limit: Some(value.monthly_limit),
            month: Some(value.month),
            year: Some(value.year),
        }
    }
}
