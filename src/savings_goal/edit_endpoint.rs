//! Defines the endpoint for editing a savings goal.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    database_id::SavingsGoalId,
    extract::{Json, Path},
    savings_goal::{GoalForm, GoalFormState, SavingsGoalPatch},
    timezone::local_now,
};

/// A route handler for changing the title, target or deadline of a savings
/// goal, responds with the updated goal.
///
/// The deadline is left as is when the form omits it.
pub async fn edit_goal_endpoint(
    State(state): State<GoalFormState>,
    Path(goal_id): Path<SavingsGoalId>,
    Json(form): Json<GoalForm>,
) -> Response {
    let keep_deadline = form.deadline.is_none();

    let goal = match local_now(&state.local_timezone).and_then(|now| form.validate(now.date())) {
        Ok(goal) => goal,
        Err(error) => return error.into_json_response("save savings goal"),
    };

    let mut patch = SavingsGoalPatch::from(goal);
    if keep_deadline {
        patch.deadline = None;
    }

    match state.goals.update(goal_id, patch).await {
        Ok(Some(goal)) => Json(goal).into_response(),
        Ok(None) => Error::NotFound.into_json_response("save savings goal"),
        Err(error) => error.into_json_response("save savings goal"),
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::put};
    use axum_test::TestServer;
    use serde_json::json;
    use time::macros::date;

    use crate::{
        endpoints::{self, format_endpoint},
        savings_goal::{GoalFormState, SavingsGoal, SavingsGoalService},
        test_utils::{goal, goal_service},
    };

    use super::edit_goal_endpoint;

    fn get_test_server(goals: SavingsGoalService) -> TestServer {
        let state = GoalFormState {
            goals,
            local_timezone: "Etc/UTC".to_owned(),
        };
        let app = Router::new()
            .route(endpoints::GOAL, put(edit_goal_endpoint))
            .with_state(state);

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn edits_goal_and_keeps_saved_amount() {
        let service = goal_service(vec![goal(1, "Laptop", 2000.0, 900.0, date!(2024 - 09 - 01))]);
        let server = get_test_server(service);

        let response = server
            .put(&format_endpoint(endpoints::GOAL, 1))
            .json(&json!({"title": "Gaming laptop", "targetAmount": 3000.0, "deadline": "2024-11-01"}))
            .await;

        response.assert_status_ok();
        let goal = response.json::<SavingsGoal>();
        assert_eq!(goal.title, "Gaming laptop");
        assert_eq!(goal.target_amount, 3000.0);
        assert_eq!(goal.current_amount, 900.0);
        assert_eq!(goal.deadline, date!(2024 - 11 - 01));
    }

    #[tokio::test]
    async fn omitted_deadline_is_unchanged() {
        let service = goal_service(vec![goal(1, "Laptop", 2000.0, 900.0, date!(2024 - 09 - 01))]);
        let server = get_test_server(service);

        let response = server
            .put(&format_endpoint(endpoints::GOAL, 1))
            .json(&json!({"title": "Laptop", "targetAmount": 2500.0}))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<SavingsGoal>().deadline,
            date!(2024 - 09 - 01)
        );
    }

    #[tokio::test]
    async fn missing_goal_is_not_found() {
        let server = get_test_server(goal_service(Vec::new()));

        server
            .put(&format_endpoint(endpoints::GOAL, 1))
            .json(&json!({"title": "Laptop", "targetAmount": 2500.0}))
            .await
            .assert_status_not_found();
    }
}
