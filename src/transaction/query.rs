//! Searching and filtering a list of transactions.

use serde::{Deserialize, Serialize};

use crate::transaction::{Transaction, TransactionType};

/// Which transaction types to keep when filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    fn matches(self, kind: TransactionType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => kind == TransactionType::Income,
            TypeFilter::Expense => kind == TransactionType::Expense,
        }
    }
}

/// The query parameters accepted by the transaction list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionQuery {
    /// Text to look for in the description or category.
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: TypeFilter,
}

impl TransactionQuery {
    /// Whether `transaction` should be included in the results.
    ///
    /// The search text is matched case-insensitively against the description
    /// and the category. A blank search matches everything.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if !self.kind.matches(transaction.kind) {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(search) => {
                let search = search.to_lowercase();

                transaction.description.to_lowercase().contains(&search)
                    || transaction.category.to_lowercase().contains(&search)
            }
        }
    }
}

/// Keep the transactions that match `query`, preserving their order.
pub fn filter_transactions(
    transactions: Vec<Transaction>,
    query: &TransactionQuery,
) -> Vec<Transaction> {
    transactions
        .into_iter()
        .filter(|transaction| query.matches(transaction))
        .collect()
}
