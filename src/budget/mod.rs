//! Monthly spending limits per category.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod list_endpoint;
mod overview_endpoint;
mod service;

pub use core::{Budget, BudgetPatch, NewBudget};
pub use create_endpoint::{BudgetFormState, create_budget_endpoint, upsert_budget_endpoint};
pub use delete_endpoint::delete_budget_endpoint;
pub use edit_endpoint::edit_budget_endpoint;
pub use form::BudgetForm;
pub use list_endpoint::{BudgetQuery, get_budget_endpoint, list_budgets_endpoint};
pub use overview_endpoint::{
    BudgetOverview, BudgetOverviewState, get_budget_overview_endpoint, summarize_budgets,
};
pub use service::BudgetService;
