//! The service for reading and modifying budgets.

use crate::{
    Error,
    budget::{Budget, BudgetPatch, NewBudget},
    config::Operation,
    database_id::BudgetId,
    format::format_currency,
    month::MonthKey,
    store::Store,
};

/// Provides CRUD operations over the budget collection.
#[derive(Debug, Clone)]
pub struct BudgetService {
    store: Store<Budget>,
}

impl BudgetService {
    pub fn new(store: Store<Budget>) -> Self {
        Self { store }
    }

    /// All budgets in the order they were added.
    pub async fn get_all(&self) -> Result<Vec<Budget>, Error> {
        self.store.delay(Operation::List).await;

        self.store.read(|budgets| budgets.to_vec())
    }

    pub async fn get_by_id(&self, id: BudgetId) -> Result<Option<Budget>, Error> {
        self.store.delay(Operation::Get).await;

        self.store.read(|budgets| budgets.get(id).cloned())
    }

    /// Add a budget.
    ///
    /// # Errors
    /// Returns [Error::DuplicateBudget] if there is already a budget for the
    /// same category, month and year. The check and the insert happen under
    /// one lock.
    pub async fn create(&self, budget: NewBudget) -> Result<Budget, Error> {
        self.store.delay(Operation::Create).await;

        let budget = self.store.write(|budgets| {
            let is_taken = budgets
                .iter()
                .any(|existing| existing.matches_key(&budget.category, budget.month, budget.year));
            if is_taken {
                return Err(Error::DuplicateBudget(budget.category, budget.month));
            }

            Ok(budgets.insert_with(|id| budget.finalize(id)))
        })??;

        tracing::debug!(
            "created budget {} for {} in {}",
            budget.id,
            budget.category,
            budget.month
        );

        Ok(budget)
    }

    /// Merge `patch` into the budget with `id`.
    ///
    /// Returns `None` if there is no such budget.
    ///
    /// # Errors
    /// Returns [Error::DuplicateBudget] if the patched budget would share its
    /// category, month and year with another budget.
    pub async fn update(&self, id: BudgetId, patch: BudgetPatch) -> Result<Option<Budget>, Error> {
        self.store.delay(Operation::Update).await;

        let updated = self.store.write(|budgets| {
            let Some(mut patched) = budgets.get(id).cloned() else {
                return Ok(None);
            };
            patch.apply(&mut patched);

            let is_taken = budgets.iter().any(|other| {
                other.id != id && other.matches_key(&patched.category, patched.month, patched.year)
            });
            if is_taken {
                return Err(Error::DuplicateBudget(patched.category, patched.month));
            }

            if let Some(budget) = budgets.get_mut(id) {
                *budget = patched.clone();
            }

            Ok(Some(patched))
        })??;

        if updated.is_some() {
            tracing::debug!("updated budget {id}");
        }

        Ok(updated)
    }

    /// Delete the budget with `id`, returning whether it existed.
    pub async fn delete(&self, id: BudgetId) -> Result<bool, Error> {
        self.store.delay(Operation::Delete).await;

        let deleted = self.store.write(|budgets| budgets.remove(id))?;

        if deleted {
            tracing::debug!("deleted budget {id}");
        }

        Ok(deleted)
    }

    /// The budgets for `month`.
    pub async fn get_by_month(&self, month: MonthKey) -> Result<Vec<Budget>, Error> {
        self.store.delay(Operation::Filter).await;

        self.store.read(|budgets| {
            budgets
                .iter()
                .filter(|budget| budget.month == month)
                .cloned()
                .collect()
        })
    }

    /// Set the limit for `category` in `month` of `year`.
    ///
    /// Overwrites the limit of the existing budget for that category and month,
    /// otherwise creates a new budget. The lookup and the write happen under
    /// one lock so two calls for the same key never create two budgets.
    pub async fn upsert_budget(
        &self,
        category: &str,
        monthly_limit: f64,
        month: MonthKey,
        year: i32,
    ) -> Result<Budget, Error> {
        self.store.delay(Operation::Update).await;

        self.store.write(|budgets| {
            let existing = budgets
                .iter()
                .find(|budget| budget.matches_key(category, month, year))
                .map(|budget| budget.id);

            match existing.and_then(|id| budgets.get_mut(id)) {
                Some(budget) => {
                    budget.monthly_limit = monthly_limit;
                    tracing::debug!(
                        "updated limit of budget {} to {}",
                        budget.id,
                        format_currency(monthly_limit)
                    );
                    budget.clone()
                }
                None => {
                    let budget = budgets.insert_with(|id| {
                        NewBudget {
                            category: category.to_owned(),
                            monthly_limit,
                            month,
                            year,
                        }
                        .finalize(id)
                    });
                    tracing::debug!("created budget {} for {category} in {month}", budget.id);
                    budget
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use time::Month;

    use crate::{
        Error,
        budget::{BudgetPatch, BudgetService, NewBudget},
        config::Latency,
        month::MonthKey,
        store::Store,
        test_utils::{budget, budget_service},
    };

    const JUNE: MonthKey = MonthKey::new(2024, Month::June);

    fn new_budget(category: &str, monthly_limit: f64, month: MonthKey) -> NewBudget {
        NewBudget {
            category: category.to_owned(),
            monthly_limit,
            month,
            year: month.year(),
        }
    }

    #[tokio::test]
    async fn upsert_creates_then_updates_in_place() {
        let service = budget_service(Vec::new());

        let created = service
            .upsert_budget("Food", 500.0, JUNE, 2024)
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.monthly_limit, 500.0);
        assert_eq!(service.get_all().await.unwrap().len(), 1);

        let updated = service
            .upsert_budget("Food", 600.0, JUNE, 2024)
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.monthly_limit, 600.0);
        assert_eq!(service.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn upsert_never_duplicates_key() {
        let service = budget_service(vec![
            budget(1, "Food", 400.0, JUNE),
            budget(2, "Shopping", 100.0, JUNE),
        ]);

        let keys = [
            ("Food", JUNE),
            ("Food", JUNE.previous()),
            ("Shopping", JUNE),
            ("Travel", JUNE),
            ("Food", JUNE),
            ("Travel", JUNE),
        ];
        for (index, (category, month)) in keys.into_iter().enumerate() {
            service
                .upsert_budget(category, 100.0 + index as f64, month, month.year())
                .await
                .unwrap();
        }

        let budgets = service.get_all().await.unwrap();
        assert_eq!(budgets.len(), 4);
        for budget in &budgets {
            let duplicates = budgets
                .iter()
                .filter(|other| other.matches_key(&budget.category, budget.month, budget.year))
                .count();
            assert_eq!(duplicates, 1, "duplicate budget for {}", budget.category);
        }
    }

    #[tokio::test]
    async fn get_by_month_filters_budgets() {
        let service = budget_service(vec![
            budget(1, "Food", 400.0, JUNE),
            budget(2, "Food", 450.0, JUNE.previous()),
            budget(3, "Shopping", 100.0, JUNE),
        ]);

        let ids: Vec<_> = service
            .get_by_month(JUNE)
            .await
            .unwrap()
            .iter()
            .map(|budget| budget.id)
            .collect();

        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn update_and_delete_missing_budget() {
        let service = budget_service(vec![budget(1, "Food", 400.0, JUNE)]);

        let updated = service
            .update(
                2,
                BudgetPatch {
                    monthly_limit: Some(1.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated, None);
        assert!(!service.delete(2).await.unwrap());
        assert_eq!(service.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_rejects_existing_key() {
        let service = budget_service(vec![budget(1, "Food", 400.0, JUNE)]);

        let result = service.create(new_budget("Food", 500.0, JUNE)).await;

        assert_eq!(
            result,
            Err(Error::DuplicateBudget("Food".to_owned(), JUNE))
        );
        assert_eq!(service.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn concurrent_creates_for_same_key_make_one_budget() {
        let latency = Latency {
            create: Duration::from_millis(20),
            ..Latency::none()
        };
        let service = BudgetService::new(Store::new(Vec::new(), latency));

        let (first, second) = tokio::join!(
            service.create(new_budget("Food", 500.0, JUNE)),
            service.create(new_budget("Food", 500.0, JUNE)),
        );

        assert!(first.is_ok() != second.is_ok());
        assert_eq!(service.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_rejects_move_onto_existing_key() {
        let service = budget_service(vec![
            budget(1, "Food", 400.0, JUNE),
            budget(2, "Shopping", 100.0, JUNE),
        ]);

        let result = service
            .update(
                2,
                BudgetPatch {
                    category: Some("Food".to_owned()),
                    ..Default::default()
                },
            )
            .await;

        assert_eq!(
            result,
            Err(Error::DuplicateBudget("Food".to_owned(), JUNE))
        );
        assert_eq!(
            service.get_by_id(2).await.unwrap().unwrap().category,
            "Shopping"
        );
    }

    #[tokio::test]
    async fn update_can_keep_own_key() {
        let service = budget_service(vec![budget(1, "Food", 400.0, JUNE)]);

        let updated = service
            .update(1, BudgetPatch::from(new_budget("Food", 450.0, JUNE)))
            .await
            .unwrap();

        assert_eq!(updated.map(|budget| budget.monthly_limit), Some(450.0));
    }
}
