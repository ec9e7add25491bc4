//! Record ID type definitions.

/// Alias for the integer type used for record IDs in every collection.
pub type DatabaseId = i64;
pub type TransactionId = DatabaseId;
pub type CategoryId = DatabaseId;
pub type BudgetId = DatabaseId;
pub type SavingsGoalId = DatabaseId;
