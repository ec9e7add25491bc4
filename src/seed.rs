//! The records the stores start with.

use std::{fs, path::Path};

use serde::de::DeserializeOwned;

use crate::{Budget, Category, Error, SavingsGoal, Transaction};

const TRANSACTIONS_FILE: &str = "transactions.json";
const CATEGORIES_FILE: &str = "categories.json";
const BUDGETS_FILE: &str = "budgets.json";
const SAVINGS_GOALS_FILE: &str = "savings_goals.json";

/// The initial contents of every collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Seed {
    /// The contents of `transactions.json`.
    pub transactions: Vec<Transaction>,
    /// The contents of `categories.json`.
    pub categories: Vec<Category>,
    /// The contents of `budgets.json`.
    pub budgets: Vec<Budget>,
    /// The contents of `savings_goals.json`.
    pub savings_goals: Vec<SavingsGoal>,
}

impl Seed {
    /// The sample data compiled into the binary.
    ///
    /// # Errors
    /// Returns [Error::InvalidSeedData] if one of the bundled files cannot be
    /// parsed.
    pub fn embedded() -> Result<Self, Error> {
        Ok(Self {
            transactions: parse(
                TRANSACTIONS_FILE,
                include_str!("../data/transactions.json"),
            )?,
            categories: parse(CATEGORIES_FILE, include_str!("../data/categories.json"))?,
            budgets: parse(BUDGETS_FILE, include_str!("../data/budgets.json"))?,
            savings_goals: parse(
                SAVINGS_GOALS_FILE,
                include_str!("../data/savings_goals.json"),
            )?,
        })
    }

    /// Load the four seed files from `dir`.
    ///
    /// # Errors
    /// Returns [Error::SeedIo] if a file cannot be read and
    /// [Error::InvalidSeedData] if a file cannot be parsed.
    pub fn from_dir(dir: &Path) -> Result<Self, Error> {
        Ok(Self {
            transactions: read(dir, TRANSACTIONS_FILE)?,
            categories: read(dir, CATEGORIES_FILE)?,
            budgets: read(dir, BUDGETS_FILE)?,
            savings_goals: read(dir, SAVINGS_GOALS_FILE)?,
        })
    }
}

fn read<T: DeserializeOwned>(dir: &Path, file_name: &str) -> Result<Vec<T>, Error> {
    let path = dir.join(file_name);
    let text = fs::read_to_string(&path)
        .map_err(|error| Error::SeedIo(format!("{}: {error}", path.display())))?;

    parse(file_name, &text)
}

fn parse<T: DeserializeOwned>(file_name: &str, text: &str) -> Result<Vec<T>, Error> {
    serde_json::from_str(text).map_err(|error| Error::InvalidSeedData(format!("{file_name}: {error}")))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::{Error, TransactionType};

    use super::Seed;

    #[test]
    fn embedded_seed_parses() {
        let seed = Seed::embedded().expect("bundled seed data should be valid");

        assert!(!seed.transactions.is_empty());
        assert!(!seed.budgets.is_empty());
        assert!(!seed.savings_goals.is_empty());
        assert_eq!(
            seed.categories
                .iter()
                .filter(|category| category.kind == TransactionType::Expense)
                .count(),
            14
        );
        assert_eq!(
            seed.categories
                .iter()
                .filter(|category| category.kind == TransactionType::Income)
                .count(),
            4
        );
        assert!(seed.categories.iter().all(|category| !category.is_custom));
    }

    #[test]
    fn embedded_transactions_follow_sign_convention() {
        let seed = Seed::embedded().unwrap();

        for transaction in &seed.transactions {
            assert_eq!(
                transaction.amount,
                transaction.kind.signed_amount(transaction.amount),
                "transaction {} has the wrong sign",
                transaction.id
            );
        }
    }

    #[test]
    fn embedded_budgets_have_unique_keys() {
        let seed = Seed::embedded().unwrap();

        for (i, budget) in seed.budgets.iter().enumerate() {
            assert!(
                !seed.budgets[i + 1..]
                    .iter()
                    .any(|other| other.matches_key(&budget.category, budget.month, budget.year)),
                "budget {} is duplicated",
                budget.id
            );
        }
    }

    #[test]
    fn embedded_records_name_known_categories() {
        let seed = Seed::embedded().unwrap();
        let is_known = |name: &str, kind: TransactionType| {
            seed.categories
                .iter()
                .any(|category| category.has_name(name, kind))
        };

        for transaction in &seed.transactions {
            assert!(
                is_known(&transaction.category, transaction.kind),
                "transaction {} has an unknown category",
                transaction.id
            );
        }
        for budget in &seed.budgets {
            assert!(
                is_known(&budget.category, TransactionType::Expense),
                "budget {} is not for an expense category",
                budget.id
            );
        }
    }

    #[test]
    fn loads_seed_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("transactions.json"), "[]").unwrap();
        fs::write(dir.path().join("categories.json"), "[]").unwrap();
        fs::write(dir.path().join("budgets.json"), "[]").unwrap();
        fs::write(
            dir.path().join("savings_goals.json"),
            r#"[{"id": 3, "title": "Bike", "targetAmount": 800, "currentAmount": 100,
                 "deadline": "2024-10-01", "createdAt": "2024-01-01T00:00:00Z"}]"#,
        )
        .unwrap();

        let seed = Seed::from_dir(dir.path()).unwrap();

        assert!(seed.transactions.is_empty());
        assert_eq!(seed.savings_goals[0].id, 3);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = Seed::from_dir(dir.path());

        assert!(matches!(result, Err(Error::SeedIo(_))));
    }

    #[test]
    fn malformed_file_is_invalid_seed_data() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("transactions.json"), "{not json").unwrap();

        let result = Seed::from_dir(dir.path());

        assert!(matches!(result, Err(Error::InvalidSeedData(_))));
    }
}
