use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{Error, database_id::SavingsGoalId, extract::Path, savings_goal::SavingsGoalService};

/// A route handler for deleting a savings goal, responds with no content.
pub async fn delete_goal_endpoint(
    State(service): State<SavingsGoalService>,
    Path(goal_id): Path<SavingsGoalId>,
) -> Response {
    match service.delete(goal_id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => Error::NotFound.into_json_response("delete savings goal"),
        Err(error) => error.into_json_response("delete savings goal"),
    }
}
