//! The savings page data: every goal with its progress and the overall totals.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use time::OffsetDateTime;

use crate::{
    aggregation::{GoalProgress, goal_progress, overall_savings_progress},
    savings_goal::{GoalFormState, SavingsGoal},
    timezone::local_now,
};

/// Progress across all savings goals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalOverview {
    pub goals: Vec<GoalProgress>,
    pub total_target: f64,
    pub total_saved: f64,
    /// The total saved as a percentage of the total target, not capped.
    pub overall_progress: f64,
}

/// Work out the progress of each goal in `goals` as of `now`.
pub fn summarize_goals(goals: &[SavingsGoal], now: OffsetDateTime) -> GoalOverview {
    GoalOverview {
        goals: goals.iter().map(|goal| goal_progress(goal, now)).collect(),
        total_target: goals.iter().map(|goal| goal.target_amount).sum(),
        total_saved: goals.iter().map(|goal| goal.current_amount).sum(),
        overall_progress: overall_savings_progress(goals),
    }
}

/// A route handler for the progress of every savings goal.
pub async fn get_goal_overview_endpoint(State(state): State<GoalFormState>) -> Response {
    let now = match local_now(&state.local_timezone) {
        Ok(now) => now,
        Err(error) => return error.into_json_response("load savings goals"),
    };

    match state.goals.get_all().await {
        Ok(goals) => Json(summarize_goals(&goals, now)).into_response(),
        Err(error) => error.into_json_response("load savings goals"),
    }
}
