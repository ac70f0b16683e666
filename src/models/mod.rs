//! Data models for upiq
//!
//! Core domain types: transactions and their statement candidates, categories,
//! budget limits, rupee amounts, calendar months, and the flexible date
//! ingestion helpers.

pub mod budget;
pub mod candidate;
pub mod category;
pub mod date;
pub mod ids;
pub mod money;
pub mod month;
pub mod transaction;

pub use budget::{percent_used, BudgetLimit, BudgetStatus};
pub use candidate::StatementCandidate;
pub use category::{normalize_name, Category, CategoryKind};
pub use ids::{CategoryId, TransactionId};
pub use money::{Amount, AmountParseError};
pub use month::Month;
pub use transaction::{
    Transaction, TransactionKind, DEFAULT_CATEGORY, DEFAULT_PAYMENT_METHOD,
};
