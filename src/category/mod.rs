//! Categories for grouping transactions, both built-in and user-created.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod list_endpoint;
mod service;

pub use core::{Category, CategoryPatch, NewCategory};
pub use create_endpoint::create_category_endpoint;
pub use delete_endpoint::delete_category_endpoint;
pub use edit_endpoint::edit_category_endpoint;
pub use form::CategoryForm;
pub use list_endpoint::{get_category_endpoint, list_categories_endpoint};
pub use service::CategoryService;
