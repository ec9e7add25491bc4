//! Defines the endpoint for editing an existing transaction.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    database_id::TransactionId,
    extract::{Json, Path},
    transaction::{
        TransactionForm, TransactionFormState, TransactionPatch,
        create_endpoint::validate_transaction,
    },
};

/// A route handler for replacing the details of a transaction, responds with
/// the updated transaction.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionFormState>,
    Path(transaction_id): Path<TransactionId>,
    Json(form): Json<TransactionForm>,
) -> Response {
    let patch = match validate_transaction(&state.categories, form).await {
        Ok(transaction) => TransactionPatch::from(transaction),
        Err(error) => return error.into_json_response("save transaction"),
    };

    match state.transactions.update(transaction_id, patch).await {
        Ok(Some(transaction)) => Json(transaction).into_response(),
        Ok(None) => Error::NotFound.into_json_response("save transaction"),
        Err(error) => error.into_json_response("save transaction"),
    }
}
