//! Configuration for the simulated latency of the in-memory stores.

use std::time::Duration;

/// The kinds of store operation that have their own simulated latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Fetch every record in a collection.
    List,
    /// Fetch a single record by ID.
    Get,
    /// Insert a new record.
    Create,
    /// Modify an existing record.
    Update,
    /// Remove a record.
    Delete,
    /// Fetch the records matching a filter, e.g. by month or by type.
    Filter,
}

/// How long each store operation waits before it takes effect.
///
/// The stores stand in for a remote API, so every call is delayed to mimic a
/// network round trip. Use [Latency::none] in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    /// Fetching a whole collection.
    pub list: Duration,
    /// Fetching one record.
    pub get: Duration,
    /// Inserting a record.
    pub create: Duration,
    /// Changing a record.
    pub update: Duration,
    /// Removing a record.
    pub delete: Duration,
    /// Fetching the records that match a filter.
    pub filter: Duration,
}

impl Latency {
    /// No delay for any operation.
    pub const fn none() -> Self {
        Self {
            list: Duration::ZERO,
            get: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
            filter: Duration::ZERO,
        }
    }

    /// The delays used for transactions, budgets and savings goals.
    pub const fn standard() -> Self {
        Self {
            list: Duration::from_millis(300),
            get: Duration::from_millis(200),
            create: Duration::from_millis(400),
            update: Duration::from_millis(350),
            delete: Duration::from_millis(250),
            filter: Duration::from_millis(300),
        }
    }

    /// The delays used for categories, which are cheaper to look up.
    pub const fn categories() -> Self {
        Self {
            list: Duration::from_millis(200),
            get: Duration::from_millis(150),
            create: Duration::from_millis(300),
            update: Duration::from_millis(250),
            delete: Duration::from_millis(200),
            filter: Duration::from_millis(200),
        }
    }

    /// The delay for `operation`.
    pub fn for_operation(&self, operation: Operation) -> Duration {
        match operation {
            Operation::List => self.list,
            Operation::Get => self.get,
            Operation::Create => self.create,
            Operation::Update => self.update,
            Operation::Delete => self.delete,
            Operation::Filter => self.filter,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::standard()
    }
}

/// Whether the stores should simulate network latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LatencyProfile {
    /// Delay each operation by the [standard](Latency::standard) amounts.
    #[default]
    Simulated,
    /// Resolve every operation immediately.
    Disabled,
}

impl LatencyProfile {
    /// The latency for transactions, budgets and savings goals.
    pub fn standard(self) -> Latency {
        match self {
            LatencyProfile::Simulated => Latency::standard(),
            LatencyProfile::Disabled => Latency::none(),
        }
    }

    /// The latency for categories.
    pub fn categories(self) -> Latency {
        match self {
            LatencyProfile::Simulated => Latency::categories(),
            LatencyProfile::Disabled => Latency::none(),
        }
    }
}
