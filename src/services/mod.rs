//! Service layer for upiq
//!
//! Business logic on top of the storage layer: validation, statement
//! parsing, duplicate screening, batch import, budget joins, and analytics.

pub mod analytics;
pub mod budget;
pub mod category;
pub mod dedup;
pub mod import;
pub mod statement;
pub mod transaction;

pub use budget::BudgetService;
pub use category::{CategoryService, CreateCategoryInput, UpdateCategoryInput};
pub use import::ImportService;
pub use transaction::{CreateTransactionInput, TransactionFilter, TransactionService};
