//! Spending grouped by category.

use std::collections::HashMap;

use serde::Serialize;

use crate::{month::MonthKey, transaction::Transaction};

/// The total spent in one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    /// The name of the category.
    pub category: String,
    /// The magnitude of the money spent, always positive.
    pub amount: f64,
}

/// Group the expenses in `transactions` by category, largest total first.
///
/// Categories with the same total are ordered by name. Income is ignored.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: HashMap<&str, f64> = HashMap::new();

    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        *totals.entry(transaction.category.as_str()).or_default() += transaction.amount.abs();
    }

    let mut breakdown: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, amount)| CategoryTotal {
            category: category.to_owned(),
            amount,
        })
        .collect();

    breakdown.sort_by(|a, b| {
        b.amount
            .total_cmp(&a.amount)
            .then_with(|| a.category.cmp(&b.category))
    });

    breakdown
}

/// The `count` categories with the most spending.
pub fn top_categories(transactions: &[Transaction], count: usize) -> Vec<CategoryTotal> {
    let mut breakdown = category_breakdown(transactions);
    breakdown.truncate(count);
    breakdown
}

/// The magnitude of the money spent in `category` during `month`.
pub fn spent_in_category(transactions: &[Transaction], category: &str, month: MonthKey) -> f64 {
    transactions
        .iter()
        .filter(|t| t.is_expense() && t.category == category && t.is_in_month(month))
        .map(|t| t.amount.abs())
        .sum()
}
