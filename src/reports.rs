//! The reports data: income and spending over the last six or twelve months.

use std::{fmt, str::FromStr};

use axum::{
    Json,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    aggregation::{CategoryTotal, TrendPoint, top_categories, trend_series},
    extract::Query,
    format::current_month,
    month::MonthKey,
    transaction::{Transaction, TransactionService},
};

/// The number of categories listed in the report.
pub const TOP_CATEGORY_COUNT: usize = 10;

/// How many months a report covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum TimeRange {
    /// The last six months, including the current one.
    #[default]
    #[serde(rename = "6months")]
    SixMonths,
    /// The last twelve months, including the current one.
    #[serde(rename = "12months")]
    TwelveMonths,
}

impl TimeRange {
    /// The number of months in the range.
    pub fn months(self) -> usize {
        match self {
            TimeRange::SixMonths => 6,
            TimeRange::TwelveMonths => 12,
        }
    }
}

impl FromStr for TimeRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "6months" => Ok(TimeRange::SixMonths),
            "12months" => Ok(TimeRange::TwelveMonths),
            other => Err(Error::InvalidTimeRange(other.to_owned())),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRange::SixMonths => f.write_str("6months"),
            TimeRange::TwelveMonths => f.write_str("12months"),
        }
    }
}

/// The query parameters accepted by the reports endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    /// "6months" or "12months", defaults to six months.
    pub range: Option<String>,
}

/// The state needed for reports.
#[derive(Debug, Clone)]
pub struct ReportState {
    /// The transactions the report is built from.
    pub transactions: TransactionService,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for ReportState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transactions: state.transactions.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The income and spending over a time range.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// The range the report covers.
    pub range: TimeRange,
    /// Income and expenses per month, oldest first.
    pub trend: Vec<TrendPoint>,
    /// Total income over the range.
    pub total_income: f64,
    /// Total expenses over the range.
    pub total_expenses: f64,
    /// `total_income` divided by the number of months in the range.
    pub average_monthly_income: f64,
    /// `total_expenses` divided by the number of months in the range.
    pub average_monthly_expenses: f64,
    /// The categories with the most spending across all transactions.
    pub top_categories: Vec<CategoryTotal>,
}

/// Build the report for the `range` months ending with `end`.
pub fn summarize_report(
    range: TimeRange,
    end: MonthKey,
    transactions: &[Transaction],
) -> ReportSummary {
    let trend = trend_series(transactions, end, range.months());
    let total_income: f64 = trend.iter().map(|point| point.income).sum();
    let total_expenses: f64 = trend.iter().map(|point| point.expenses).sum();
    let months = range.months() as f64;

    ReportSummary {
        range,
        trend,
        total_income,
        total_expenses,
        average_monthly_income: total_income / months,
        average_monthly_expenses: total_expenses / months,
        top_categories: top_categories(transactions, TOP_CATEGORY_COUNT),
    }
}

/// A route handler for the report ending with the current month.
pub async fn get_report_endpoint(
    State(state): State<ReportState>,
    Query(query): Query<ReportQuery>,
) -> Response {
    let range = match query.range.as_deref().map(TimeRange::from_str) {
        None => TimeRange::default(),
        Some(Ok(range)) => range,
        Some(Err(error)) => return error.into_json_response("load report"),
    };

    let month = match current_month(&state.local_timezone) {
        Ok(month) => month,
        Err(error) => return error.into_json_response("load report"),
    };

    match state.transactions.get_all().await {
        Ok(transactions) => Json(summarize_report(range, month, &transactions)).into_response(),
        Err(error) => error.into_json_response("load report"),
    }
}
