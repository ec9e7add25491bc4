//! Defines the endpoint for adding money to a savings goal.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    database_id::SavingsGoalId,
    extract::{Json, Path},
    savings_goal::{ContributionForm, SavingsGoalService},
};

/// A route handler for adding a contribution to a savings goal, responds with
/// the updated goal.
pub async fn add_contribution_endpoint(
    State(service): State<SavingsGoalService>,
    Path(goal_id): Path<SavingsGoalId>,
    Json(form): Json<ContributionForm>,
) -> Response {
    let amount = match form.validate() {
        Ok(amount) => amount,
        Err(error) => return error.into_json_response("add contribution"),
    };

    match service.update_amount(goal_id, amount).await {
        Ok(Some(goal)) => Json(goal).into_response(),
        Ok(None) => Error::NotFound.into_json_response("add contribution"),
        Err(error) => error.into_json_response("add contribution"),
    }
}
