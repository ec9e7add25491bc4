use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{Error, budget::BudgetService, database_id::BudgetId, extract::Path};

/// A route handler for deleting a budget, responds with no content.
pub async fn delete_budget_endpoint(
    State(service): State<BudgetService>,
    Path(budget_id): Path<BudgetId>,
) -> Response {
    match service.delete(budget_id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => Error::NotFound.into_json_response("delete budget"),
        Err(error) => error.into_json_response("delete budget"),
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, http::StatusCode, routing::delete};
    use axum_test::TestServer;
    use time::Month;

    use crate::{
        endpoints::{self, format_endpoint},
        month::MonthKey,
        test_utils::{budget, budget_service},
    };

    use super::delete_budget_endpoint;

    #[tokio::test]
    async fn deletes_budget() {
        let service = budget_service(vec![budget(
            1,
            "Food",
            500.0,
            MonthKey::new(2024, Month::June),
        )]);
        let app = Router::new()
            .route(endpoints::BUDGET, delete(delete_budget_endpoint))
            .with_state(service.clone());
        let server = TestServer::try_new(app).expect("Could not create test server.");

        server
            .delete(&format_endpoint(endpoints::BUDGET, 1))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        assert!(service.get_all().await.unwrap().is_empty());

        server
            .delete(&format_endpoint(endpoints::BUDGET, 1))
            .await
            .assert_status_not_found();
    }
}
