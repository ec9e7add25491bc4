//! Defines the endpoint for creating a new transaction.

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    category::CategoryService,
    extract::Json,
    transaction::{NewTransaction, TransactionForm, TransactionService},
};

/// The state needed to create or edit a transaction.
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    /// The transactions to add to.
    pub transactions: TransactionService,
    /// The categories a transaction may belong to.
    pub categories: CategoryService,
}

impl FromRef<AppState> for TransactionFormState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transactions: state.transactions.clone(),
            categories: state.categories.clone(),
        }
    }
}

/// Validate `form` and check that its category exists for its type.
///
/// The transaction takes the stored spelling of the category name.
pub(crate) async fn validate_transaction(
    categories: &CategoryService,
    form: TransactionForm,
) -> Result<NewTransaction, Error> {
    let mut transaction = form.validate()?;
    transaction.category = categories
        .known_name(&transaction.category, transaction.kind)
        .await?;

    Ok(transaction)
}

/// A route handler for creating a new transaction, responds with the created
/// transaction.
///
/// Responds with 400 if the category does not exist for the transaction type.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionFormState>,
    Json(form): Json<TransactionForm>,
) -> Response {
    let transaction = match validate_transaction(&state.categories, form).await {
        Ok(transaction) => transaction,
        Err(error) => return error.into_json_response("save transaction"),
    };

    match state.transactions.create(transaction).await {
        Ok(transaction) => (StatusCode::CREATED, Json(transaction)).into_response(),
        Err(error) => error.into_json_response("save transaction"),
    }
}
