//! Endpoints for reading transactions.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    database_id::TransactionId,
    extract::{Path, Query},
    month::MonthKey,
    transaction::{TransactionQuery, TransactionService, filter_transactions},
};

/// A route handler that lists transactions, newest first.
///
/// Accepts the optional query parameters `search` and `type`.
pub async fn list_transactions_endpoint(
    State(service): State<TransactionService>,
    Query(query): Query<TransactionQuery>,
) -> Response {
    match service.get_all().await {
        Ok(transactions) => Json(filter_transactions(transactions, &query)).into_response(),
        Err(error) => error.into_json_response("load transactions"),
    }
}

/// A route handler for getting a single transaction by its ID.
pub async fn get_transaction_endpoint(
    State(service): State<TransactionService>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    match service.get_by_id(transaction_id).await {
        Ok(Some(transaction)) => Json(transaction).into_response(),
        Ok(None) => Error::NotFound.into_json_response("load transaction"),
        Err(error) => error.into_json_response("load transaction"),
    }
}

/// A route handler for the transactions in a month given as "YYYY-MM".
pub async fn transactions_by_month_endpoint(
    State(service): State<TransactionService>,
    Path(month): Path<String>,
) -> Response {
    let month: MonthKey = match month.parse() {
        Ok(month) => month,
        Err(error) => return error.into_json_response("load transactions"),
    };

    match service.get_by_month(month).await {
        Ok(transactions) => Json(transactions).into_response(),
        Err(error) => error.into_json_response("load transactions"),
    }
}

/// A route handler for the transactions in a category.
pub async fn transactions_by_category_endpoint(
    State(service): State<TransactionService>,
    Path(category): Path<String>,
) -> Response {
    match service.get_by_category(&category).await {
        Ok(transactions) => Json(transactions).into_response(),
        Err(error) => error.into_json_response("load transactions"),
    }
}
