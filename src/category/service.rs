//! The service for reading and modifying categories.

use crate::{
    Error,
    category::{Category, CategoryPatch, NewCategory},
    config::Operation,
    database_id::CategoryId,
    store::Store,
    transaction::TransactionType,
};

/// Provides CRUD operations over the category collection.
#[derive(Debug, Clone)]
pub struct CategoryService {
    store: Store<Category>,
}

impl CategoryService {
    pub fn new(store: Store<Category>) -> Self {
        Self { store }
    }

    /// All categories in the order they were added.
    pub async fn get_all(&self) -> Result<Vec<Category>, Error> {
        self.store.delay(Operation::List).await;

        self.store.read(|categories| categories.to_vec())
    }

    pub async fn get_by_id(&self, id: CategoryId) -> Result<Option<Category>, Error> {
        self.store.delay(Operation::Get).await;

        self.store.read(|categories| categories.get(id).cloned())
    }

    /// Add a custom category.
    ///
    /// # Errors
    /// Returns [Error::DuplicateCategoryName] if a category of the same type
    /// already has the name. The check and the insert happen under one lock.
    pub async fn create(&self, category: NewCategory) -> Result<Category, Error> {
        self.store.delay(Operation::Create).await;

        let category = self.store.write(|categories| {
            if categories
                .iter()
                .any(|existing| existing.has_name(&category.name, category.kind))
            {
                return Err(Error::DuplicateCategoryName(category.name));
            }

            Ok(categories.insert_with(|id| category.finalize(id)))
        })??;

        tracing::debug!("created category {} \"{}\"", category.id, category.name);

        Ok(category)
    }

    /// Merge `patch` into the category with `id`.
    ///
    /// Returns `None` if there is no such category.
    ///
    /// # Errors
    /// Returns [Error::DuplicateCategoryName] if another category of the same
    /// type already has the patched name.
    pub async fn update(
        &self,
        id: CategoryId,
        patch: CategoryPatch,
    ) -> Result<Option<Category>, Error> {
        self.store.delay(Operation::Update).await;

        let updated = self.store.write(|categories| {
            let Some(mut patched) = categories.get(id).cloned() else {
                return Ok(None);
            };
            patch.apply(&mut patched);

            if categories
                .iter()
                .any(|other| other.id != id && other.has_name(&patched.name, patched.kind))
            {
                return Err(Error::DuplicateCategoryName(patched.name));
            }

            if let Some(category) = categories.get_mut(id) {
                *category = patched.clone();
            }

            Ok(Some(patched))
        })??;

        if updated.is_some() {
            tracing::debug!("updated category {id}");
        }

        Ok(updated)
    }

    /// Delete the custom category with `id`.
    ///
    /// Returns `false` without removing anything if there is no such category
    /// or if it is built-in.
    pub async fn delete(&self, id: CategoryId) -> Result<bool, Error> {
        self.store.delay(Operation::Delete).await;

        let deleted = self.store.write(|categories| {
            let is_custom = categories.get(id).is_some_and(|category| category.is_custom);

            is_custom && categories.remove(id)
        })?;

        if deleted {
            tracing::debug!("deleted category {id}");
        }

        Ok(deleted)
    }

    /// The categories for either income or expenses.
    pub async fn get_by_type(&self, kind: TransactionType) -> Result<Vec<Category>, Error> {
        self.store.delay(Operation::Filter).await;

        self.store.read(|categories| {
            categories
                .iter()
                .filter(|category| category.kind == kind)
                .cloned()
                .collect()
        })
    }

    /// The category of type `kind` whose name matches `name`, ignoring case.
    pub async fn find_by_name(
        &self,
        name: &str,
        kind: TransactionType,
    ) -> Result<Option<Category>, Error> {
        self.store.delay(Operation::Filter).await;

        self.store.read(|categories| {
            categories
                .iter()
                .find(|category| category.has_name(name, kind))
                .cloned()
        })
    }

    /// The stored spelling of the category of type `kind` named `name`.
    ///
    /// # Errors
    /// Returns [Error::UnknownCategory] if there is no such category.
    pub async fn known_name(&self, name: &str, kind: TransactionType) -> Result<String, Error> {
        self.find_by_name(name, kind)
            .await?
            .map(|category| category.name)
            .ok_or_else(|| Error::UnknownCategory(name.to_owned(), kind))
    }
}
