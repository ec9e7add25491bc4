//! Defines the endpoints for creating a budget and for setting a budget's limit.

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    budget::{BudgetForm, BudgetService, NewBudget},
    category::CategoryService,
    extract::Json,
    format::current_month,
    transaction::TransactionType,
};

/// The state needed to create or upsert a budget.
#[derive(Debug, Clone)]
pub struct BudgetFormState {
    /// The budgets to add to.
    pub budgets: BudgetService,
    /// The categories a budget may be set for.
    pub categories: CategoryService,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for BudgetFormState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            budgets: state.budgets.clone(),
            categories: state.categories.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Validate `form` and check that it names an existing expense category.
///
/// The budget takes the stored spelling of the category name.
pub(crate) async fn validate_budget(
    state: &BudgetFormState,
    form: BudgetForm,
) -> Result<NewBudget, Error> {
    let mut budget = form.validate(current_month(&state.local_timezone)?)?;
    budget.category = state
        .categories
        .known_name(&budget.category, TransactionType::Expense)
        .await?;

    Ok(budget)
}

/// A route handler for creating a new budget, responds with the created budget.
///
/// Responds with 400 if there is already a budget for the category and month,
/// or if the category is not an expense category.
pub async fn create_budget_endpoint(
    State(state): State<BudgetFormState>,
    Json(form): Json<BudgetForm>,
) -> Response {
    let budget = match validate_budget(&state, form).await {
        Ok(budget) => budget,
        Err(error) => return error.into_json_response("save budget"),
    };

    match state.budgets.create(budget).await {
        Ok(budget) => (StatusCode::CREATED, Json(budget)).into_response(),
        Err(error) => error.into_json_response("save budget"),
    }
}

/// A route handler that sets the limit for a category and month, creating the
/// budget if needed. Responds with the saved budget.
pub async fn upsert_budget_endpoint(
    State(state): State<BudgetFormState>,
    Json(form): Json<BudgetForm>,
) -> Response {
    let budget = match validate_budget(&state, form).await {
        Ok(budget) => budget,
        Err(error) => return error.into_json_response("save budget"),
    };

    match state
        .budgets
        .upsert_budget(
            &budget.category,
            budget.monthly_limit,
            budget.month,
            budget.year,
        )
        .await
    {
        Ok(budget) => Json(budget).into_response(),
        Err(error) => error.into_json_response("save budget"),
    }
}
