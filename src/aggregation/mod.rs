//! Pure functions that derive totals, breakdowns and progress from the stored
//! records.
//!
//! Nothing in this module touches the stores, so callers fetch the records
//! first and pass them in.

mod budget;
mod category;
mod monthly;
mod savings;

pub use budget::{
    BudgetUtilization, CRITICAL_THRESHOLD, Severity, WARNING_THRESHOLD, budget_utilization,
    total_budget_limit, utilization_percentage,
};
pub use category::{CategoryTotal, category_breakdown, spent_in_category, top_categories};
pub use monthly::{MonthlyTotals, TrendPoint, monthly_totals, totals, trend_series};
pub use savings::{
    DUE_SOON_DAYS, GoalProgress, GoalStatus, days_remaining, goal_progress,
    overall_savings_progress, progress_percentage,
};
