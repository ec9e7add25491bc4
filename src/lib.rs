//! Pocketbook is a personal finance service for tracking transactions, monthly
//! budgets and savings goals.
//!
//! The data lives in memory, seeded from JSON files at start-up, and is served
//! as a JSON API. Every read and write is delayed to mimic a remote backend.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde::Serialize;
use tokio::signal;

use crate::month::MonthKey;

pub mod aggregation;
mod app_state;
mod budget;
mod category;
mod config;
mod dashboard;
mod database_id;
pub mod endpoints;
mod extract;
pub mod format;
mod logging;
pub mod month;
mod reports;
mod routing;
mod savings_goal;
mod seed;
mod store;
mod timezone;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use budget::{Budget, BudgetPatch};
pub use category::{Category, CategoryPatch};
pub use config::{Latency, LatencyProfile};
pub use database_id::DatabaseId;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use savings_goal::{SavingsGoal, SavingsGoalPatch};
pub use seed::Seed;
pub use transaction::{Transaction, TransactionPatch, TransactionType};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// Services report missing records with `None` or `false`, handlers turn
    /// that into this error.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An amount was zero, negative or not a number.
    #[error("Please enter a valid amount")]
    InvalidAmount,

    /// A required form field was left blank.
    #[error("Please fill in all required fields: {0} is empty")]
    EmptyField(&'static str),

    /// A month string was not in the form `YYYY-MM`.
    #[error("\"{0}\" is not a valid month, expected the format YYYY-MM")]
    InvalidMonth(String),

    /// A transaction type other than "income" or "expense" was given.
    #[error("\"{0}\" is not a valid transaction type, expected \"income\" or \"expense\"")]
    InvalidTransactionType(String),

    /// A report range other than "6months" or "12months" was given.
    #[error("\"{0}\" is not a valid time range, expected \"6months\" or \"12months\"")]
    InvalidTimeRange(String),

    /// A category with the same name and type already exists.
    #[error("the category \"{0}\" already exists")]
    DuplicateCategoryName(String),

    /// A budget for the same category and month already exists.
    #[error("a budget for \"{0}\" in {1} already exists")]
    DuplicateBudget(String, MonthKey),

    /// A transaction or budget named a category that does not exist for its type.
    #[error("\"{0}\" is not a known {1} category")]
    UnknownCategory(String, TransactionType),

    /// Tried to delete one of the categories that ship with the app.
    #[error("built-in categories cannot be deleted")]
    BuiltInCategory,

    /// The request body, path or query string could not be parsed.
    #[error("{0}")]
    InvalidRequest(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// Could not acquire the lock for one of the in-memory stores.
    #[error("could not acquire the store lock")]
    StoreLockError,

    /// A seed file did not contain the expected JSON.
    #[error("invalid seed data: {0}")]
    InvalidSeedData(String),

    /// A seed file could not be read.
    #[error("could not read seed data: {0}")]
    SeedIo(String),
}

impl Error {
    /// The HTTP status code that best describes this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::InvalidAmount
            | Error::EmptyField(_)
            | Error::InvalidMonth(_)
            | Error::InvalidTransactionType(_)
            | Error::InvalidTimeRange(_)
            | Error::DuplicateCategoryName(_)
            | Error::DuplicateBudget(_, _)
            | Error::UnknownCategory(_, _)
            | Error::BuiltInCategory
            | Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::InvalidTimezoneError(_)
            | Error::StoreLockError
            | Error::InvalidSeedData(_)
            | Error::SeedIo(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert the error into a JSON response, describing internal errors as
    /// "Failed to {action}", e.g. "Failed to load transactions".
    ///
    /// Internal errors are logged, their details are not sent to the client.
    fn into_json_response(self, action: &str) -> Response {
        let status = self.status_code();

        let message = if status.is_server_error() {
            tracing::error!("Failed to {action}: {self}");
            format!("Failed to {action}")
        } else {
            self.to_string()
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        self.into_json_response("complete the request")
    }
}

/// The JSON body sent with every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}
