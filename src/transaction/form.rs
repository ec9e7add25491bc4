//! The request body for creating or replacing a transaction.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    format::iso_date,
    transaction::{NewTransaction, TransactionType},
};

/// The form data for creating or editing a transaction.
///
/// The amount is entered as a positive number, its sign is derived from the
/// transaction type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionForm {
    /// The value of the transaction in dollars.
    pub amount: f64,
    /// The name of the category, e.g. "Food & Dining".
    #[serde(default)]
    pub category: String,
    /// Whether money was earned or spent.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: String,
    /// The date when the transaction occurred.
    #[serde(with = "iso_date")]
    pub date: Date,
}

impl TransactionForm {
    /// Check the form and convert it into a transaction ready to be stored.
    ///
    /// # Errors
    /// Returns [Error::EmptyField] if the category or description is blank and
    /// [Error::InvalidAmount] if the amount is not a positive number.
    pub fn validate(self) -> Result<NewTransaction, Error> {
        let category = self.category.trim();
        if category.is_empty() {
            return Err(Error::EmptyField("category"));
        }

        let description = self.description.trim();
        if description.is_empty() {
            return Err(Error::EmptyField("description"));
        }

        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(Error::InvalidAmount);
        }

        Ok(NewTransaction {
            amount: self.kind.signed_amount(self.amount),
            category: category.to_owned(),
            kind: self.kind,
            description: description.to_owned(),
            date: self.date,
        })
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        Error,
        transaction::{NewTransaction, TransactionType},
    };

    use super::TransactionForm;

    fn form(amount: f64, kind: TransactionType) -> TransactionForm {
        TransactionForm {
            amount,
            category: "Food & Dining".to_owned(),
            kind,
            description: "Lunch".to_owned(),
            date: date!(2024 - 06 - 05),
        }
    }

    #[test]
    fn expense_amount_becomes_negative() {
        let transaction = form(45.99, TransactionType::Expense).validate().unwrap();

        assert_eq!(
            transaction,
            NewTransaction {
                amount: -45.99,
                category: "Food & Dining".to_owned(),
                kind: TransactionType::Expense,
                description: "Lunch".to_owned(),
                date: date!(2024 - 06 - 05),
            }
        );
    }

    #[test]
    fn income_amount_stays_positive() {
        let transaction = form(1000.0, TransactionType::Income).validate().unwrap();

        assert_eq!(transaction.amount, 1000.0);
    }

    #[test]
    fn rejects_non_positive_amounts() {
        for amount in [0.0, -5.0, f64::NAN] {
            assert_eq!(
                form(amount, TransactionType::Expense).validate(),
                Err(Error::InvalidAmount)
            );
        }
    }

    #[test]
    fn rejects_blank_fields() {
        let blank_category = TransactionForm {
            category: "  ".to_owned(),
            ..form(10.0, TransactionType::Expense)
        };
        let blank_description = TransactionForm {
            description: String::new(),
            ..form(10.0, TransactionType::Expense)
        };

        assert_eq!(
            blank_category.validate(),
            Err(Error::EmptyField("category"))
        );
        assert_eq!(
            blank_description.validate(),
            Err(Error::EmptyField("description"))
        );
    }
}
