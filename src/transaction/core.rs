//! Defines the core data models for transactions.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{
    Error, database_id::TransactionId, format::iso_date, month::MonthKey, store::Record,
};

// ============================================================================
// MODELS
// ============================================================================

/// Whether money was earned or spent.
///
/// Categories use the same distinction to say which kind of transaction they
/// apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Apply the sign convention for this type to a positive `amount`.
    ///
    /// Expenses are stored as negative amounts and income as positive amounts.
    pub fn signed_amount(self, amount: f64) -> f64 {
        match self {
            TransactionType::Income => amount.abs(),
            TransactionType::Expense => -amount.abs(),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        };
        f.write_str(label)
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(Error::InvalidTransactionType(s.to_owned())),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The amount of money spent or earned in this transaction.
    ///
    /// Negative for expenses, positive for income.
    pub amount: f64,
    /// The name of the category the transaction belongs to, e.g. "Salary".
    pub category: String,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// When the transaction was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Transaction {
    /// Whether the transaction happened in `month`.
    pub fn is_in_month(&self, month: MonthKey) -> bool {
        month.contains(self.date)
    }

    /// Whether money was spent.
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Whether money was earned.
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }
}

impl Record for Transaction {
    fn id(&self) -> TransactionId {
        self.id
    }
}

/// The data needed to record a new transaction.
///
/// The amount is stored as given, callers are expected to have applied the
/// sign convention (see [TransactionType::signed_amount]).
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub amount: f64,
    pub category: String,
    pub kind: TransactionType,
    pub description: String,
    pub date: Date,
}

impl NewTransaction {
    /// Attach an ID and creation time to create the stored [Transaction].
    pub fn finalize(self, id: TransactionId, created_at: OffsetDateTime) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            category: self.category,
            kind: self.kind,
            description: self.description,
            date: self.date,
            created_at,
        }
    }
}

/// A partial update to a [Transaction].
///
/// Fields set to `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPatch {
    /// The new amount, already signed.
    pub amount: Option<f64>,
    /// The category name.
    pub category: Option<String>,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
    /// What the transaction was for.
    pub description: Option<String>,
    /// When the transaction happened.
    #[serde(default, deserialize_with = "iso_date::deserialize_option")]
    pub date: Option<Date>,
}

impl TransactionPatch {
    /// Overwrite the fields of `transaction` that are set in this patch.
    pub fn apply(self, transaction: &mut Transaction) {
        if let Some(amount) = self.amount {
            transaction.amount = amount;
        }
        if let Some(category) = self.category {
            transaction.category = category;
        }
        if let Some(kind) = self.kind {
            transaction.kind = kind;
        }
        if let Some(description) = self.description {
            transaction.description = description;
        }
        if let Some(date) = self.date {
            transaction.date = date;
        }
    }
}

impl From<NewTransaction> for TransactionPatch {
    fn from(value: NewTransaction) -> Self {
        Self {
            amount: Some(value.amount),
            category: Some(value.category),
            kind: Some(value.kind),
            description: Some(value.description),
            date: Some(value.date),
        }
    }
}
