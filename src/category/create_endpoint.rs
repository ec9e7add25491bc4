//! Defines the endpoint for creating a custom category.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    category::{CategoryForm, CategoryService},
    extract::Json,
};

/// A route handler for creating a new custom category, responds with the
/// created category.
///
/// Responds with 400 if a category of the same type already has the name.
pub async fn create_category_endpoint(
    State(service): State<CategoryService>,
    Json(form): Json<CategoryForm>,
) -> Response {
    let category = match form.validate() {
        Ok(category) => category,
        Err(error) => return error.into_json_response("save category"),
    };

    match service.create(category).await {
        Ok(category) => (StatusCode::CREATED, Json(category)).into_response(),
        Err(error) => error.into_json_response("save category"),
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, http::StatusCode, routing::post};
    use axum_test::TestServer;
    use serde_json::json;

    use crate::{
        category::{Category, CategoryService},
        endpoints,
        test_utils::{category, category_service},
        transaction::TransactionType,
    };

    use super::create_category_endpoint;

    fn get_test_server(service: CategoryService) -> TestServer {
        let app = Router::new()
            .route(endpoints::CATEGORIES, post(create_category_endpoint))
            .with_state(service);

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn can_create_category() {
        let service = category_service(vec![category(
            1,
            "Salary",
            TransactionType::Income,
            false,
        )]);
        let server = get_test_server(service.clone());

        let response = server
            .post(endpoints::CATEGORIES)
            .json(&json!({"name": "Pets", "type": "expense", "isCustom": false}))
            .await;

        response.assert_status(StatusCode::CREATED);
        let created = response.json::<Category>();
        assert_eq!(created.id, 2);
        assert!(created.is_custom);
        assert_eq!(service.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn rejects_duplicate_name_for_same_type() {
        let service = category_service(vec![category(
            1,
            "Salary",
            TransactionType::Income,
            false,
        )]);
        let server = get_test_server(service.clone());

        server
            .post(endpoints::CATEGORIES)
            .json(&json!({"name": "salary", "type": "income"}))
            .await
            .assert_status_bad_request();

        assert_eq!(service.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn allows_same_name_for_other_type() {
        let service = category_service(vec![category(
            1,
            "Other",
            TransactionType::Income,
            false,
        )]);
        let server = get_test_server(service);

        server
            .post(endpoints::CATEGORIES)
            .json(&json!({"name": "Other", "type": "expense"}))
            .await
            .assert_status(StatusCode::CREATED);
    }
}
