use serde::{Deserialize, Serialize};

use crate::{Error, category::NewCategory, transaction::TransactionType};

/// The form data for creating or renaming a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryForm {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl CategoryForm {
    /// Check the form and convert it into a category ready to be stored.
    ///
    /// # Errors
    /// Returns [Error::EmptyField] if the name is blank.
    pub fn validate(self) -> Result<NewCategory, Error> {
        let name = self.name.trim();

        if name.is_empty() {
            return Err(Error::EmptyField("name"));
        }

        Ok(NewCategory {
            name: name.to_owned(),
            kind: self.kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, transaction::TransactionType};

    use super::CategoryForm;

    #[test]
    fn trims_name() {
        let category = CategoryForm {
            name: "  Pets ".to_owned(),
            kind: TransactionType::Expense,
        }
        .validate()
        .unwrap();

        assert_eq!(category.name, "Pets");
    }

    #[test]
    fn rejects_blank_name() {
        let result = CategoryForm {
            name: " ".to_owned(),
            kind: TransactionType::Expense,
        }
        .validate();

        assert_eq!(result, Err(Error::EmptyField("name")));
    }
}
