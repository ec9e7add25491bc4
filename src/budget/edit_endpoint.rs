//! Defines the endpoint for editing an existing budget.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    budget::{BudgetForm, BudgetFormState, BudgetPatch, create_endpoint::validate_budget},
    database_id::BudgetId,
    extract::{Json, Path},
};

/// A route handler for replacing the details of a budget, responds with the
/// updated budget.
///
/// Responds with 400 if another budget already has the category and month.
pub async fn edit_budget_endpoint(
    State(state): State<BudgetFormState>,
    Path(budget_id): Path<BudgetId>,
    Json(form): Json<BudgetForm>,
) -> Response {
    let budget = match validate_budget(&state, form).await {
        Ok(budget) => budget,
        Err(error) => return error.into_json_response("save budget"),
    };

    match state
        .budgets
        .update(budget_id, BudgetPatch::from(budget))
        .await
    {
        Ok(Some(budget)) => Json(budget).into_response(),
        Ok(None) => Error::NotFound.into_json_response("save budget"),
        Err(error) => error.into_json_response("save budget"),
    }
}
