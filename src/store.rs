//! The in-memory collections that back each service.
//!
//! A [Store] owns one collection of records plus the counter used to assign
//! IDs to new records. Clones of a store share the same collection.

use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{
    Error,
    config::{Latency, Operation},
    database_id::DatabaseId,
};

/// A record that lives in a [Store].
pub trait Record: Clone {
    /// The ID of the record, unique within its collection.
    fn id(&self) -> DatabaseId;
}

/// The records of a single collection and its ID counter.
#[derive(Debug)]
pub struct Collection<T> {
    records: Vec<T>,
    last_id: DatabaseId,
}

impl<T: Record> Collection<T> {
    fn new(records: Vec<T>) -> Self {
        let last_id = records.iter().map(Record::id).max().unwrap_or(0);

        Self { records, last_id }
    }

    /// Insert a new record built from the next available ID.
    ///
    /// IDs are never reused, even after the record holding the highest ID is
    /// deleted or the collection is emptied.
    pub fn insert_with(&mut self, build: impl FnOnce(DatabaseId) -> T) -> T {
        self.last_id += 1;
        let record = build(self.last_id);
        self.records.push(record.clone());
        record
    }

    pub fn get(&self, id: DatabaseId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn get_mut(&mut self, id: DatabaseId) -> Option<&mut T> {
        self.records.iter_mut().find(|record| record.id() == id)
    }

    /// Remove the record with `id`, returning whether it existed.
    pub fn remove(&mut self, id: DatabaseId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        self.records.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    /// Copies of every record, in insertion order.
    pub fn to_vec(&self) -> Vec<T> {
        self.records.clone()
    }
}

/// A shared, in-memory collection of records with simulated latency.
pub struct Store<T> {
    collection: Arc<Mutex<Collection<T>>>,
    latency: Latency,
}

impl<T: Record> Store<T> {
    /// Create a store seeded with `records`.
    ///
    /// New records get IDs counting up from the highest ID in `records`, or
    /// from 1 if `records` is empty.
    pub fn new(records: Vec<T>, latency: Latency) -> Self {
        Self {
            collection: Arc::new(Mutex::new(Collection::new(records))),
            latency,
        }
    }

    /// Wait for the simulated latency of `operation`.
    pub async fn delay(&self, operation: Operation) {
        let duration = self.latency.for_operation(operation);

        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }

    /// Run `f` with read access to the collection.
    ///
    /// # Errors
    /// Returns [Error::StoreLockError] if the collection lock is poisoned.
    pub fn read<R>(&self, f: impl FnOnce(&Collection<T>) -> R) -> Result<R, Error> {
        let collection = self.lock()?;
        Ok(f(&collection))
    }

    /// Run `f` with write access to the collection.
    ///
    /// # Errors
    /// Returns [Error::StoreLockError] if the collection lock is poisoned.
    pub fn write<R>(&self, f: impl FnOnce(&mut Collection<T>) -> R) -> Result<R, Error> {
        let mut collection = self.lock()?;
        Ok(f(&mut collection))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Collection<T>>, Error> {
        self.collection.lock().map_err(|error| {
            tracing::error!("could not acquire store lock: {error}");
            Error::StoreLockError
        })
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            collection: Arc::clone(&self.collection),
            latency: self.latency,
        }
    }
}

impl<T> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}
