//! Transactions: the record of money earned and spent.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod list_endpoint;
mod query;
mod service;

pub use core::{NewTransaction, Transaction, TransactionPatch, TransactionType};
pub use create_endpoint::{TransactionFormState, create_transaction_endpoint};
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use form::TransactionForm;
pub use list_endpoint::{
    get_transaction_endpoint, list_transactions_endpoint, transactions_by_category_endpoint,
    transactions_by_month_endpoint,
};
pub use query::{TransactionQuery, TypeFilter, filter_transactions};
pub use service::TransactionService;
