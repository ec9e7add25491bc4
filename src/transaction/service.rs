//! The service for reading and modifying transactions.

use time::OffsetDateTime;

use crate::{
    Error,
    config::Operation,
    database_id::TransactionId,
    format::{format_currency, format_date},
    month::MonthKey,
    store::Store,
    transaction::{NewTransaction, Transaction, TransactionPatch},
};

/// Provides CRUD operations over the transaction collection.
///
/// Every call waits for the store's simulated latency before it takes effect.
/// Missing records are reported with `None`/`false` rather than errors.
#[derive(Debug, Clone)]
pub struct TransactionService {
    store: Store<Transaction>,
}

impl TransactionService {
    pub fn new(store: Store<Transaction>) -> Self {
        Self { store }
    }

    /// All transactions, newest first.
    pub async fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        self.store.delay(Operation::List).await;

        let mut transactions = self.store.read(|transactions| transactions.to_vec())?;
        transactions.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(transactions)
    }

    pub async fn get_by_id(&self, id: TransactionId) -> Result<Option<Transaction>, Error> {
        self.store.delay(Operation::Get).await;

        self.store.read(|transactions| transactions.get(id).cloned())
    }

    /// Record a new transaction, assigning it the next ID and the current time.
    pub async fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error> {
        self.store.delay(Operation::Create).await;

        let created_at = OffsetDateTime::now_utc();
        let transaction = self.store.write(|transactions| {
            transactions.insert_with(|id| transaction.finalize(id, created_at))
        })?;

        tracing::debug!(
            "created transaction {} for {} on {}",
            transaction.id,
            format_currency(transaction.amount),
            format_date(transaction.date)
        );

        Ok(transaction)
    }

    /// Merge `patch` into the transaction with `id`.
    ///
    /// Returns `None` if there is no such transaction.
    pub async fn update(
        &self,
        id: TransactionId,
        patch: TransactionPatch,
    ) -> Result<Option<Transaction>, Error> {
        self.store.delay(Operation::Update).await;

        let updated = self.store.write(|transactions| {
            transactions.get_mut(id).map(|transaction| {
                patch.apply(transaction);
                transaction.clone()
            })
        })?;

        if updated.is_some() {
            tracing::debug!("updated transaction {id}");
        }

        Ok(updated)
    }

    /// Delete the transaction with `id`, returning whether it existed.
    pub async fn delete(&self, id: TransactionId) -> Result<bool, Error> {
        self.store.delay(Operation::Delete).await;

        let deleted = self.store.write(|transactions| transactions.remove(id))?;

        if deleted {
            tracing::debug!("deleted transaction {id}");
        }

        Ok(deleted)
    }

    /// The transactions dated within `month`, in insertion order.
    pub async fn get_by_month(&self, month: MonthKey) -> Result<Vec<Transaction>, Error> {
        self.store.delay(Operation::Filter).await;

        self.store.read(|transactions| {
            transactions
                .iter()
                .filter(|transaction| transaction.is_in_month(month))
                .cloned()
                .collect()
        })
    }

    /// The transactions whose category is exactly `category`.
    pub async fn get_by_category(&self, category: &str) -> Result<Vec<Transaction>, Error> {
        self.store.delay(Operation::Filter).await;

        self.store.read(|transactions| {
            transactions
                .iter()
                .filter(|transaction| transaction.category == category)
                .cloned()
                .collect()
        })
    }
}
