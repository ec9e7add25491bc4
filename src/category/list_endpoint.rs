//! Endpoints for reading categories.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    Error,
    category::CategoryService,
    database_id::CategoryId,
    extract::{Path, Query},
    transaction::TransactionType,
};

/// The query parameters accepted by the category list.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    /// Only list the categories for this type.
    #[serde(default, rename = "type")]
    pub kind: Option<TransactionType>,
}

/// A route handler that lists categories, optionally only those of one type.
pub async fn list_categories_endpoint(
    State(service): State<CategoryService>,
    Query(query): Query<CategoryQuery>,
) -> Response {
    let categories = match query.kind {
        Some(kind) => service.get_by_type(kind).await,
        None => service.get_all().await,
    };

    match categories {
        Ok(categories) => Json(categories).into_response(),
        Err(error) => error.into_json_response("load categories"),
    }
}

/// A route handler for getting a single category by its ID.
pub async fn get_category_endpoint(
    State(service): State<CategoryService>,
    Path(category_id): Path<CategoryId>,
) -> Response {
    match service.get_by_id(category_id).await {
        Ok(Some(category)) => Json(category).into_response(),
        Ok(None) => Error::NotFound.into_json_response("load category"),
        Err(error) => error.into_json_response("load category"),
    }
}
