use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{Error, database_id::TransactionId, extract::Path, transaction::TransactionService};

/// A route handler for deleting a transaction, responds with no content.
pub async fn delete_transaction_endpoint(
    State(service): State<TransactionService>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    match service.delete(transaction_id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => Error::NotFound.into_json_response("delete transaction"),
        Err(error) => error.into_json_response("delete transaction"),
    }
}
