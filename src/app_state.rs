//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;

use crate::{
    Error, Seed,
    budget::BudgetService,
    category::CategoryService,
    config::LatencyProfile,
    savings_goal::SavingsGoalService,
    store::Store,
    timezone::get_local_offset,
    transaction::TransactionService,
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Transactions, newest first.
    pub transactions: TransactionService,
    /// Built-in and user-created categories.
    pub categories: CategoryService,
    /// Monthly spending limits.
    pub budgets: BudgetService,
    /// Savings goals and their progress.
    pub savings_goals: SavingsGoalService,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] with one store per collection filled from `seed`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known
    /// timezone.
    pub fn new(seed: Seed, latency: LatencyProfile, local_timezone: &str) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            transactions: TransactionService::new(Store::new(
                seed.transactions,
                latency.standard(),
            )),
            categories: CategoryService::new(Store::new(seed.categories, latency.categories())),
            budgets: BudgetService::new(Store::new(seed.budgets, latency.standard())),
            savings_goals: SavingsGoalService::new(Store::new(
                seed.savings_goals,
                latency.standard(),
            )),
            local_timezone: local_timezone.to_owned(),
        })
    }
}

impl FromRef<AppState> for TransactionService {
    fn from_ref(state: &AppState) -> Self {
        state.transactions.clone()
    }
}

impl FromRef<AppState> for CategoryService {
    fn from_ref(state: &AppState) -> Self {
        state.categories.clone()
    }
}

impl FromRef<AppState> for BudgetService {
    fn from_ref(state: &AppState) -> Self {
        state.budgets.clone()
    }
}

impl FromRef<AppState> for SavingsGoalService {
    fn from_ref(state: &AppState) -> Self {
        state.savings_goals.clone()
    }
}
