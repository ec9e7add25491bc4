use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{Error, category::CategoryService, database_id::CategoryId, extract::Path};

/// A route handler for deleting a custom category, responds with no content.
///
/// Built-in categories are left in place and the client gets a 400 response.
pub async fn delete_category_endpoint(
    State(service): State<CategoryService>,
    Path(category_id): Path<CategoryId>,
) -> Response {
    match service.delete(category_id).await {
        Ok(true) => return StatusCode::NO_CONTENT.into_response(),
        Ok(false) => {}
        Err(error) => return error.into_json_response("delete category"),
    }

    // Nothing was deleted, find out whether the category is missing or built-in.
    match service.get_by_id(category_id).await {
        Ok(Some(_)) => Error::BuiltInCategory.into_json_response("delete category"),
        Ok(None) => Error::NotFound.into_json_response("delete category"),
        Err(error) => error.into_json_response("delete category"),
    }
}
