//! How much of each budget has been spent.

use serde::Serialize;

use crate::{aggregation::spent_in_category, budget::Budget, transaction::Transaction};

/// The share of the limit spent at which a budget shows a warning.
pub const WARNING_THRESHOLD: f64 = 75.0;
/// The share of the limit spent at which a budget is nearly used up.
pub const CRITICAL_THRESHOLD: f64 = 90.0;

/// How close a budget is to its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Less than 75% spent.
    Success,
    /// At least 75% spent.
    Warning,
    /// At least 90% spent.
    Critical,
    /// The whole limit has been spent.
    Exceeded,
}

impl Severity {
    /// The severity for a utilization percentage between 0 and 100.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            Severity::Exceeded
        } else if percentage >= CRITICAL_THRESHOLD {
            Severity::Critical
        } else if percentage >= WARNING_THRESHOLD {
            Severity::Warning
        } else {
            Severity::Success
        }
    }
}

/// The percentage of `limit` that `spent` uses up, capped at 100.
///
/// A limit of zero or less counts as fully used as soon as anything is spent.
pub fn utilization_percentage(spent: f64, limit: f64) -> f64 {
    if limit <= 0.0 {
        return if spent > 0.0 { 100.0 } else { 0.0 };
    }

    (spent / limit * 100.0).min(100.0)
}

/// A budget together with how much of it has been spent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUtilization {
    /// The budget being measured.
    #[serde(flatten)]
    pub budget: Budget,
    /// The money spent in the budget's category during its month.
    pub spent: f64,
    /// The share of the limit spent, between 0 and 100.
    pub percentage: f64,
    /// The money left before the limit is reached, never negative.
    pub remaining: f64,
    /// How close the spending is to the limit.
    pub severity: Severity,
}

/// Work out how much of `budget` the expenses in `transactions` use up.
pub fn budget_utilization(budget: &Budget, transactions: &[Transaction]) -> BudgetUtilization {
    let spent = spent_in_category(transactions, &budget.category, budget.month);
    let percentage = utilization_percentage(spent, budget.monthly_limit);

    BudgetUtilization {
        budget: budget.clone(),
        spent,
        percentage,
        remaining: (budget.monthly_limit - spent).max(0.0),
        severity: Severity::from_percentage(percentage),
    }
}

/// The sum of the limits of `budgets`.
pub fn total_budget_limit(budgets: &[Budget]) -> f64 {
    budgets.iter().map(|budget| budget.monthly_limit).sum()
}
