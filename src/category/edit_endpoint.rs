//! Defines the endpoint for renaming a category.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    category::{CategoryForm, CategoryPatch, CategoryService},
    database_id::CategoryId,
    extract::{Json, Path},
};

/// A route handler for updating the name and type of a category, responds
/// with the updated category.
pub async fn edit_category_endpoint(
    State(service): State<CategoryService>,
    Path(category_id): Path<CategoryId>,
    Json(form): Json<CategoryForm>,
) -> Response {
    let category = match form.validate() {
        Ok(category) => category,
        Err(error) => return error.into_json_response("save category"),
    };

    match service
        .update(category_id, CategoryPatch::from(category))
        .await
    {
        Ok(Some(category)) => Json(category).into_response(),
        Ok(None) => Error::NotFound.into_json_response("save category"),
        Err(error) => error.into_json_response("save category"),
    }
}
