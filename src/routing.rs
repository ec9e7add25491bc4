//! Application router configuration.

use axum::{
    Router, middleware,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};

use crate::{
    AppState, Error,
    budget::{
        create_budget_endpoint, delete_budget_endpoint, edit_budget_endpoint,
        get_budget_endpoint, get_budget_overview_endpoint, list_budgets_endpoint,
        upsert_budget_endpoint,
    },
    category::{
        create_category_endpoint, delete_category_endpoint, edit_category_endpoint,
        get_category_endpoint, list_categories_endpoint,
    },
    dashboard::get_dashboard_endpoint,
    endpoints,
    logging::logging_middleware,
    reports::get_report_endpoint,
    savings_goal::{
        add_contribution_endpoint, create_goal_endpoint, delete_goal_endpoint, edit_goal_endpoint,
        get_goal_endpoint, get_goal_overview_endpoint, list_goals_endpoint,
    },
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_transaction_endpoint, list_transactions_endpoint, transactions_by_category_endpoint,
        transactions_by_month_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let transaction_routes = Router::new()
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint)
                .put(edit_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTIONS_BY_MONTH,
            get(transactions_by_month_endpoint),
        )
        .route(
            endpoints::TRANSACTIONS_BY_CATEGORY,
            get(transactions_by_category_endpoint),
        );

    let category_routes = Router::new()
        .route(
            endpoints::CATEGORIES,
            get(list_categories_endpoint).post(create_category_endpoint),
        )
        .route(
            endpoints::CATEGORY,
            get(get_category_endpoint)
                .put(edit_category_endpoint)
                .delete(delete_category_endpoint),
        );

    let budget_routes = Router::new()
        .route(
            endpoints::BUDGETS,
            get(list_budgets_endpoint).post(create_budget_endpoint),
        )
        .route(endpoints::BUDGET_UPSERT, put(upsert_budget_endpoint))
        .route(endpoints::BUDGET_OVERVIEW, get(get_budget_overview_endpoint))
        .route(
            endpoints::BUDGET,
            get(get_budget_endpoint)
                .put(edit_budget_endpoint)
                .delete(delete_budget_endpoint),
        );

    let goal_routes = Router::new()
        .route(
            endpoints::GOALS,
            get(list_goals_endpoint).post(create_goal_endpoint),
        )
        .route(endpoints::GOAL_OVERVIEW, get(get_goal_overview_endpoint))
        .route(
            endpoints::GOAL,
            get(get_goal_endpoint)
                .put(edit_goal_endpoint)
                .delete(delete_goal_endpoint),
        )
        .route(
            endpoints::GOAL_CONTRIBUTIONS,
            post(add_contribution_endpoint),
        );

    Router::new()
        .merge(transaction_routes)
        .merge(category_routes)
        .merge(budget_routes)
        .merge(goal_routes)
        .route(endpoints::DASHBOARD, get(get_dashboard_endpoint))
        .route(endpoints::REPORTS, get(get_report_endpoint))
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

async fn get_404_not_found() -> Response {
    Error::NotFound.into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use crate::{
        AppState, Seed, Transaction,
        config::LatencyProfile,
        endpoints::{self, format_endpoint},
        savings_goal::SavingsGoal,
    };

    use super::build_router;

    fn get_test_server() -> TestServer {
        let state = AppState::new(
            Seed::embedded().expect("bundled seed data should be valid"),
            LatencyProfile::Disabled,
            "Etc/UTC",
        )
        .expect("Could not create app state.");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn unknown_route_is_json_not_found() {
        let server = get_test_server();

        let response = server.get("/api/nothing-here").await;

        response.assert_status_not_found();
        assert!(response.json::<Value>()["error"].is_string());
    }

    #[tokio::test]
    async fn overview_routes_do_not_clash_with_ids() {
        let server = get_test_server();

        server.get(endpoints::BUDGET_OVERVIEW).await.assert_status_ok();
        server.get(endpoints::GOAL_OVERVIEW).await.assert_status_ok();
        server.get(endpoints::DASHBOARD).await.assert_status_ok();
        server.get(endpoints::REPORTS).await.assert_status_ok();
    }

    #[tokio::test]
    async fn created_transaction_can_be_read_back() {
        let server = get_test_server();
        let before = server
            .get(endpoints::TRANSACTIONS)
            .await
            .json::<Vec<Transaction>>()
            .len();

        let created = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "amount": 12.5,
                "category": "Food & Dining",
                "type": "expense",
                "description": "Coffee beans",
                "date": "2024-06-15"
            }))
            .await;
        created.assert_status(StatusCode::CREATED);
        let created = created.json::<Transaction>();

        let fetched = server
            .get(&format_endpoint(endpoints::TRANSACTION, created.id))
            .await
            .json::<Transaction>();
        let after = server
            .get(endpoints::TRANSACTIONS)
            .await
            .json::<Vec<Transaction>>()
            .len();

        assert_eq!(fetched, created);
        assert_eq!(fetched.amount, -12.5);
        assert_eq!(after, before + 1);
    }

    #[tokio::test]
    async fn contribution_updates_goal() {
        let server = get_test_server();
        let goals = server.get(endpoints::GOALS).await.json::<Vec<SavingsGoal>>();
        let goal = &goals[0];

        let updated = server
            .post(&format_endpoint(endpoints::GOAL_CONTRIBUTIONS, goal.id))
            .json(&json!({"amount": 100.0}))
            .await
            .json::<SavingsGoal>();

        assert_eq!(updated.current_amount, goal.current_amount + 100.0);
    }

    #[tokio::test]
    async fn built_in_category_cannot_be_deleted() {
        let server = get_test_server();

        server
            .delete(&format_endpoint(endpoints::CATEGORY, 1))
            .await
            .assert_status_bad_request();
        server
            .get(&format_endpoint(endpoints::CATEGORY, 1))
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn malformed_requests_get_json_bad_request() {
        let server = get_test_server();

        let bad_id = server.get("/api/goals/first").await;
        let bad_body = server
            .post(endpoints::BUDGETS)
            .json(&json!({"category": "Shopping", "monthlyLimit": "lots"}))
            .await;

        for response in [bad_id, bad_body] {
            response.assert_status_bad_request();
            assert!(response.json::<Value>()["error"].is_string());
        }
    }

    #[tokio::test]
    async fn transaction_must_use_known_category() {
        let server = get_test_server();

        server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "amount": 12.5,
                "category": "Food & Dining",
                "type": "income",
                "description": "Coffee beans",
                "date": "2024-06-15"
            }))
            .await
            .assert_status_bad_request();
    }
}
