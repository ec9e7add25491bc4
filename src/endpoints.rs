//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/goals/{goal_id}', use [format_endpoint].

/// The route to list or create transactions.
pub const TRANSACTIONS: &str = "/api/transactions";
/// The route to access a single transaction.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";
/// The route for the transactions dated in a month, e.g. '/api/transactions/month/2024-06'.
pub const TRANSACTIONS_BY_MONTH: &str = "/api/transactions/month/{month}";
/// The route for the transactions in a category.
pub const TRANSACTIONS_BY_CATEGORY: &str = "/api/transactions/category/{category}";
/// The route to list or create categories.
pub const CATEGORIES: &str = "/api/categories";
/// The route to access a single category.
pub const CATEGORY: &str = "/api/categories/{category_id}";
/// The route to list or create budgets.
pub const BUDGETS: &str = "/api/budgets";
/// The route to access a single budget.
pub const BUDGET: &str = "/api/budgets/{budget_id}";
/// The route to set the limit of a budget by category and month.
pub const BUDGET_UPSERT: &str = "/api/budgets/upsert";
/// The route for each budget of a month with its utilization.
pub const BUDGET_OVERVIEW: &str = "/api/budgets/overview";
/// The route to list or create savings goals.
pub const GOALS: &str = "/api/goals";
/// The route to access a single savings goal.
pub const GOAL: &str = "/api/goals/{goal_id}";
/// The route to add money to a savings goal.
pub const GOAL_CONTRIBUTIONS: &str = "/api/goals/{goal_id}/contributions";
/// The route for the progress of every savings goal.
pub const GOAL_OVERVIEW: &str = "/api/goals/overview";
/// The route for the dashboard figures.
pub const DASHBOARD: &str = "/api/dashboard";
/// The route for the income and spending reports.
pub const REPORTS: &str = "/api/reports";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/users/{user_id}', '{user_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
