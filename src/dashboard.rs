//! The dashboard data: this month's totals, budget headroom, savings progress
//! and the recent trend.

use axum::{
    Json,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{
    AppState,
    aggregation::{
        CategoryTotal, TrendPoint, category_breakdown, monthly_totals, overall_savings_progress,
        total_budget_limit, trend_series,
    },
    budget::{Budget, BudgetService},
    format::current_month,
    month::MonthKey,
    savings_goal::{SavingsGoal, SavingsGoalService},
    transaction::{Transaction, TransactionService},
};

/// The number of months shown in the dashboard trend chart.
pub const DASHBOARD_TREND_MONTHS: usize = 6;

/// The state needed for the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub transactions: TransactionService,
    pub budgets: BudgetService,
    pub savings_goals: SavingsGoalService,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transactions: state.transactions.clone(),
            budgets: state.budgets.clone(),
            savings_goals: state.savings_goals.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub month: MonthKey,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    /// The month's budget limits minus the month's expenses, negative when
    /// overspent.
    pub remaining_budget: f64,
    /// The money saved across all goals as a percentage of their targets.
    pub savings_progress: f64,
    /// The month's spending by category, for the pie chart.
    pub expense_breakdown: Vec<CategoryTotal>,
    pub trend: Vec<TrendPoint>,
}

/// Build the dashboard for `month`.
///
/// `budgets` should already be limited to `month`, `transactions` should
/// cover at least the trend period.
pub fn summarize_dashboard(
    month: MonthKey,
    transactions: &[Transaction],
    budgets: &[Budget],
    goals: &[SavingsGoal],
) -> DashboardSummary {
    let totals = monthly_totals(transactions, month);
    let this_month: Vec<Transaction> = transactions
        .iter()
        .filter(|transaction| transaction.is_in_month(month))
        .cloned()
        .collect();

    DashboardSummary {
        month,
        monthly_income: totals.income,
        monthly_expenses: totals.expenses,
        remaining_budget: total_budget_limit(budgets) - totals.expenses,
        savings_progress: overall_savings_progress(goals),
        expense_breakdown: category_breakdown(&this_month),
        trend: trend_series(transactions, month, DASHBOARD_TREND_MONTHS),
    }
}

/// A route handler for the dashboard of the current month.
pub async fn get_dashboard_endpoint(State(state): State<DashboardState>) -> Response {
    let month = match current_month(&state.local_timezone) {
        Ok(month) => month,
        Err(error) => return error.into_json_response("load dashboard"),
    };

    let result = tokio::try_join!(
        state.transactions.get_all(),
        state.budgets.get_by_month(month),
        state.savings_goals.get_all(),
    );

    match result {
        Ok((transactions, budgets, goals)) => {
            Json(summarize_dashboard(month, &transactions, &budgets, &goals)).into_response()
        }
        Err(error) => error.into_json_response("load dashboard"),
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::get};
    use axum_test::TestServer;
    use serde_json::Value;
    use time::{Month, OffsetDateTime, macros::date};

    use crate::{
        endpoints,
        month::MonthKey,
        test_utils::{
            budget, budget_service, expense, goal, goal_service, income, transaction_service,
        },
    };

    use super::{DashboardState, get_dashboard_endpoint, summarize_dashboard};

    const JUNE: MonthKey = MonthKey::new(2024, Month::June);

    #[test]
    fn summarizes_current_month() {
        let transactions = vec![
            expense(1, 50.0, "Food & Dining", date!(2024 - 06 - 03)),
            income(2, 1000.0, "Salary", date!(2024 - 06 - 01)),
            expense(3, 120.0, "Shopping", date!(2024 - 06 - 10)),
            expense(4, 999.0, "Travel", date!(2024 - 04 - 10)),
        ];
        let budgets = vec![
            budget(1, "Food & Dining", 100.0, JUNE),
            budget(2, "Shopping", 50.0, JUNE),
        ];
        let goals = vec![
            goal(1, "Vacation", 400.0, 100.0, date!(2024 - 12 - 31)),
            goal(2, "Laptop", 100.0, 150.0, date!(2024 - 08 - 31)),
        ];

        let summary = summarize_dashboard(JUNE, &transactions, &budgets, &goals);

        assert_eq!(summary.monthly_income, 1000.0);
        assert_eq!(summary.monthly_expenses, 170.0);
        assert_eq!(summary.remaining_budget, -20.0);
        assert_eq!(summary.savings_progress, 50.0);
        assert_eq!(summary.expense_breakdown.len(), 2);
        assert_eq!(summary.expense_breakdown[0].category, "Shopping");
        assert_eq!(summary.trend.len(), 6);
        assert_eq!(summary.trend[3].expenses, 999.0);
        assert_eq!(summary.trend[5].net, 830.0);
    }

    #[test]
    fn empty_dashboard_is_all_zero() {
        let summary = summarize_dashboard(JUNE, &[], &[], &[]);

        assert_eq!(summary.monthly_income, 0.0);
        assert_eq!(summary.monthly_expenses, 0.0);
        assert_eq!(summary.remaining_budget, 0.0);
        assert_eq!(summary.savings_progress, 0.0);
        assert!(summary.expense_breakdown.is_empty());
        assert!(summary.trend.iter().all(|point| point.net == 0.0));
    }

    #[tokio::test]
    async fn dashboard_endpoint_uses_current_month() {
        let today = OffsetDateTime::now_utc().date();
        let state = DashboardState {
            transactions: transaction_service(vec![expense(1, 40.0, "Food & Dining", today)]),
            budgets: budget_service(Vec::new()),
            savings_goals: goal_service(Vec::new()),
            local_timezone: "Etc/UTC".to_owned(),
        };
        let app = Router::new()
            .route(endpoints::DASHBOARD, get(get_dashboard_endpoint))
            .with_state(state);
        let server = TestServer::try_new(app).expect("Could not create test server.");

        let response = server.get(endpoints::DASHBOARD).await;

        response.assert_status_ok();
        let summary = response.json::<Value>();
        assert_eq!(
            summary["month"],
            MonthKey::from_date(today).to_string().as_str()
        );
        assert_eq!(summary["monthlyExpenses"], 40.0);
        assert_eq!(summary["remainingBudget"], -40.0);
        assert_eq!(summary["expenseBreakdown"][0]["category"], "Food & Dining");
    }
}
