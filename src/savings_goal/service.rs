//! The service for reading and modifying savings goals.

use time::OffsetDateTime;

use crate::{
    Error,
    aggregation::progress_percentage,
    config::Operation,
    database_id::SavingsGoalId,
    format::{format_currency, format_percentage},
    savings_goal::{NewSavingsGoal, SavingsGoal, SavingsGoalPatch},
    store::Store,
};

/// Provides CRUD operations over the savings goal collection.
#[derive(Debug, Clone)]
pub struct SavingsGoalService {
    store: Store<SavingsGoal>,
}

impl SavingsGoalService {
    pub fn new(store: Store<SavingsGoal>) -> Self {
        Self { store }
    }

    /// All savings goals, soonest deadline first.
    pub async fn get_all(&self) -> Result<Vec<SavingsGoal>, Error> {
        self.store.delay(Operation::List).await;

        let mut goals = self.store.read(|goals| goals.to_vec())?;
        goals.sort_by_key(|goal| goal.deadline);

        Ok(goals)
    }

    pub async fn get_by_id(&self, id: SavingsGoalId) -> Result<Option<SavingsGoal>, Error> {
        self.store.delay(Operation::Get).await;

        self.store.read(|goals| goals.get(id).cloned())
    }

    /// Record a new goal, assigning it the next ID and the current time.
    pub async fn create(&self, goal: NewSavingsGoal) -> Result<SavingsGoal, Error> {
        self.store.delay(Operation::Create).await;

        let created_at = OffsetDateTime::now_utc();
        let goal = self
            .store
            .write(|goals| goals.insert_with(|id| goal.finalize(id, created_at)))?;

        tracing::debug!("created savings goal {} \"{}\"", goal.id, goal.title);

        Ok(goal)
    }

    /// Merge `patch` into the goal with `id`.
    ///
    /// Returns `None` if there is no such goal.
    pub async fn update(
        &self,
        id: SavingsGoalId,
        patch: SavingsGoalPatch,
    ) -> Result<Option<SavingsGoal>, Error> {
        self.store.delay(Operation::Update).await;

        let updated = self.store.write(|goals| {
            goals.get_mut(id).map(|goal| {
                patch.apply(goal);
                goal.clone()
            })
        })?;

        if updated.is_some() {
            tracing::debug!("updated savings goal {id}");
        }

        Ok(updated)
    }

    /// Delete the goal with `id`, returning whether it existed.
    pub async fn delete(&self, id: SavingsGoalId) -> Result<bool, Error> {
        self.store.delay(Operation::Delete).await;

        let deleted = self.store.write(|goals| goals.remove(id))?;

        if deleted {
            tracing::debug!("deleted savings goal {id}");
        }

        Ok(deleted)
    }

    /// Add `delta` to the amount saved for the goal with `id`.
    ///
    /// The amount saved is clamped at zero. Returns `None` if there is no such
    /// goal.
    pub async fn update_amount(
        &self,
        id: SavingsGoalId,
        delta: f64,
    ) -> Result<Option<SavingsGoal>, Error> {
        self.store.delay(Operation::Update).await;

        let updated = self.store.write(|goals| {
            goals.get_mut(id).map(|goal| {
                goal.contribute(delta);
                goal.clone()
            })
        })?;

        if let Some(goal) = &updated {
            tracing::debug!(
                "changed savings goal {id} by {}, now {} ({} of target)",
                format_currency(delta),
                format_currency(goal.current_amount),
                format_percentage(progress_percentage(goal.current_amount, goal.target_amount))
            );
        }

        Ok(updated)
    }
}
