//! The budget page data: each budget for a month with how much has been spent.

use axum::{
    Json,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{
    AppState,
    aggregation::{BudgetUtilization, budget_utilization, total_budget_limit},
    budget::{Budget, BudgetQuery, BudgetService},
    category::{Category, CategoryService},
    extract::Query,
    format::current_month,
    month::MonthKey,
    transaction::{Transaction, TransactionService, TransactionType},
};

/// The state needed for the budget overview.
#[derive(Debug, Clone)]
pub struct BudgetOverviewState {
    pub budgets: BudgetService,
    pub categories: CategoryService,
    pub transactions: TransactionService,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for BudgetOverviewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            budgets: state.budgets.clone(),
            categories: state.categories.clone(),
            transactions: state.transactions.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The budgets for one month and how much of each has been used.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetOverview {
    pub month: MonthKey,
    pub budgets: Vec<BudgetUtilization>,
    /// The sum of the limits of all budgets in the month.
    pub total_limit: f64,
    /// The money spent in budgeted categories.
    pub total_spent: f64,
    /// The expense categories that have no budget for the month yet.
    pub unbudgeted_categories: Vec<String>,
}

/// Combine the budgets, expense categories and transactions of `month`.
///
/// `budgets` and `transactions` are expected to already be limited to `month`.
pub fn summarize_budgets(
    month: MonthKey,
    budgets: &[Budget],
    expense_categories: &[Category],
    transactions: &[Transaction],
) -> BudgetOverview {
    let utilizations: Vec<BudgetUtilization> = budgets
        .iter()
        .map(|budget| budget_utilization(budget, transactions))
        .collect();

    let unbudgeted_categories = expense_categories
        .iter()
        .filter(|category| !budgets.iter().any(|budget| budget.category == category.name))
        .map(|category| category.name.clone())
        .collect();

    BudgetOverview {
        month,
        total_limit: total_budget_limit(budgets),
        total_spent: utilizations.iter().map(|utilization| utilization.spent).sum(),
        budgets: utilizations,
        unbudgeted_categories,
    }
}

/// A route handler for the budget overview of a month, the current month by
/// default.
pub async fn get_budget_overview_endpoint(
    State(state): State<BudgetOverviewState>,
    Query(query): Query<BudgetQuery>,
) -> Response {
    let month = match query.month {
        Some(month) => month,
        None => match current_month(&state.local_timezone) {
            Ok(month) => month,
            Err(error) => return error.into_json_response("load budget data"),
        },
    };

    let result = tokio::try_join!(
        state.budgets.get_by_month(month),
        state.categories.get_by_type(TransactionType::Expense),
        state.transactions.get_by_month(month),
    );

    match result {
        Ok((budgets, categories, transactions)) => {
            Json(summarize_budgets(month, &budgets, &categories, &transactions)).into_response()
        }
        Err(error) => error.into_json_response("load budget data"),
    }
}
