//! Income and expense totals, per month and as a trend over several months.

use serde::Serialize;

use crate::{month::MonthKey, transaction::Transaction};

/// The money earned and spent over some period.
///
/// Both amounts are positive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotals {
    /// The money earned.
    pub income: f64,
    /// The magnitude of the money spent.
    pub expenses: f64,
}

impl MonthlyTotals {
    /// Income minus expenses.
    pub fn net(&self) -> f64 {
        self.income - self.expenses
    }
}

/// Sum the income and expenses of `transactions`.
///
/// Income is the sum of the income amounts and expenses is the magnitude of
/// the sum of the expense amounts.
pub fn totals<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> MonthlyTotals {
    let mut income = 0.0;
    let mut expenses = 0.0;

    for transaction in transactions {
        if transaction.is_income() {
            income += transaction.amount;
        } else {
            expenses += transaction.amount;
        }
    }

    MonthlyTotals {
        income,
        expenses: expenses.abs(),
    }
}

/// The totals of the transactions dated within `month`.
pub fn monthly_totals(transactions: &[Transaction], month: MonthKey) -> MonthlyTotals {
    totals(
        transactions
            .iter()
            .filter(|transaction| transaction.is_in_month(month)),
    )
}

/// One month of a trend chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// The month as "YYYY-MM".
    pub key: MonthKey,
    /// The month for display, e.g. "Jun 2024".
    pub label: String,
    /// Money earned in the month.
    pub income: f64,
    /// Money spent in the month.
    pub expenses: f64,
    /// Income minus expenses.
    pub net: f64,
}

/// The totals for each of the `months` months ending with `end`, oldest first.
///
/// Months without transactions are included with zero totals.
pub fn trend_series(transactions: &[Transaction], end: MonthKey, months: usize) -> Vec<TrendPoint> {
    end.trailing(months)
        .into_iter()
        .map(|month| {
            let totals = monthly_totals(transactions, month);

            TrendPoint {
                key: month,
                label: month.label(),
                income: totals.income,
                expenses: totals.expenses,
                net: totals.net(),
            }
        })
        .collect()
}
