//! Endpoints for reading savings goals.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{Error, database_id::SavingsGoalId, extract::Path, savings_goal::SavingsGoalService};

/// A route handler that lists every savings goal, soonest deadline first.
pub async fn list_goals_endpoint(State(service): State<SavingsGoalService>) -> Response {
    match service.get_all().await {
        Ok(goals) => Json(goals).into_response(),
        Err(error) => error.into_json_response("load savings goals"),
    }
}

pub async fn get_goal_endpoint(
    State(service): State<SavingsGoalService>,
    Path(goal_id): Path<SavingsGoalId>,
) -> Response {
    match service.get_by_id(goal_id).await {
        Ok(Some(goal)) => Json(goal).into_response(),
        Ok(None) => Error::NotFound.into_json_response("load savings goal"),
        Err(error) => error.into_json_response("load savings goal"),
    }
}
