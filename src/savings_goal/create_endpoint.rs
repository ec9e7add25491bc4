//! Defines the endpoint for creating a savings goal.

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState,
    extract::Json,
    savings_goal::{GoalForm, SavingsGoalService},
    timezone::local_now,
};

/// The state needed to create or edit a savings goal.
#[derive(Debug, Clone)]
pub struct GoalFormState {
    pub goals: SavingsGoalService,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for GoalFormState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            goals: state.savings_goals.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// A route handler for creating a new savings goal, responds with the created
/// goal.
pub async fn create_goal_endpoint(
    State(state): State<GoalFormState>,
    Json(form): Json<GoalForm>,
) -> Response {
    let goal = match local_now(&state.local_timezone).and_then(|now| form.validate(now.date())) {
        Ok(goal) => goal,
        Err(error) => return error.into_json_response("save savings goal"),
    };

    match state.goals.create(goal).await {
        Ok(goal) => (StatusCode::CREATED, Json(goal)).into_response(),
        Err(error) => error.into_json_response("save savings goal"),
    }
}
