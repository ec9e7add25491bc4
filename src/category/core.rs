//! Defines the category model.

use serde::{Deserialize, Serialize};

use crate::{database_id::CategoryId, store::Record, transaction::TransactionType};

/// A label for grouping transactions, e.g. "Food & Dining".
///
/// Built-in categories ship with the seed data and cannot be deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// The ID of the category.
    pub id: CategoryId,
    /// The display name, unique among categories of the same type.
    pub name: String,
    /// Whether the category is for income or expenses.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Whether the category was created by the user.
    pub is_custom: bool,
}

impl Category {
    /// Whether this category is of type `kind` and named `name`, ignoring case.
    pub fn has_name(&self, name: &str, kind: TransactionType) -> bool {
        self.kind == kind && self.name.eq_ignore_ascii_case(name)
    }
}

impl Record for Category {
    fn id(&self) -> CategoryId {
        self.id
    }
}

/// The data needed to create a new category.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub kind: TransactionType,
}

impl NewCategory {
    /// Attach an ID to create the stored [Category].
    ///
    /// Categories created this way are always custom.
    pub fn finalize(self, id: CategoryId) -> Category {
        Category {
            id,
            name: self.name,
            kind: self.kind,
            is_custom: true,
        }
    }
}

/// A partial update to a [Category].
///
/// Whether a category is custom cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryPatch {
    /// The display name.
    pub name: Option<String>,
    /// Whether the category is for income or expenses.
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
}

impl CategoryPatch {
    /// Overwrite the fields of `category` that are set in this patch.
    pub fn apply(self, category: &mut Category) {
        if let Some(name) = self.name {
            category.name = name;
        }
        if let Some(kind) = self.kind {
            category.kind = kind;
        }
    }
}

impl From<NewCategory> for CategoryPatch {
    fn from(value: NewCategory) -> Self {
        Self {
            name: Some(value.name),
            kind: Some(value.kind),
        }
    }
}
