//! Endpoints for reading budgets.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    Error,
    budget::BudgetService,
    database_id::BudgetId,
    extract::{Path, Query},
    month::MonthKey,
};

/// The query parameters accepted by the budget list.
#[derive(Debug, Default, Deserialize)]
pub struct BudgetQuery {
    /// Only list the budgets for this month, e.g. "2024-06".
    #[serde(default)]
    pub month: Option<MonthKey>,
}

/// A route handler that lists budgets, optionally only those for one month.
pub async fn list_budgets_endpoint(
    State(service): State<BudgetService>,
    Query(query): Query<BudgetQuery>,
) -> Response {
    let budgets = match query.month {
        Some(month) => service.get_by_month(month).await,
        None => service.get_all().await,
    };

    match budgets {
        Ok(budgets) => Json(budgets).into_response(),
        Err(error) => error.into_json_response("load budgets"),
    }
}

/// A route handler for getting a single budget by its ID.
pub async fn get_budget_endpoint(
    State(service): State<BudgetService>,
    Path(budget_id): Path<BudgetId>,
) -> Response {
    match service.get_by_id(budget_id).await {
        Ok(Some(budget)) => Json(budget).into_response(),
        Ok(None) => Error::NotFound.into_json_response("load budget"),
        Err(error) => error.into_json_response("load budget"),
    }
}
