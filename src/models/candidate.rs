//! Statement candidate model
//!
//! A candidate is one parsed statement line that has not been persisted yet.
//! It deserializes from the extraction service's camelCase wire shape; the
//! date field accepts both encodings and is normalized on ingestion. The
//! `is_duplicate` flag is ephemeral, set by the dedup matcher and consumed
//! by the committer within one import session.

use chrono::NaiveDateTime;
use serde::Deserialize;

use super::date::deserialize_flexible;
use super::money::Amount;
use super::transaction::{Transaction, TransactionKind};

/// A parsed transaction awaiting import
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementCandidate {
    #[serde(default)]
    pub description: String,

    /// Decimal rupees on the wire, paise in memory
    #[serde(with = "crate::models::money::rupees")]
    pub amount: Amount,

    #[serde(rename = "type")]
    pub kind: TransactionKind,

    #[serde(default)]
    pub category: Option<String>,

    /// Normalized at the boundary; unresolvable values become `None`
    #[serde(default, deserialize_with = "deserialize_flexible")]
    pub date: Option<NaiveDateTime>,

    #[serde(default)]
    pub payment_method: Option<String>,

    #[serde(default)]
    pub is_duplicate: bool,
}

impl StatementCandidate {
    /// Create a bare candidate (statement parsers fill in the rest)
    pub fn new(description: impl Into<String>, amount: Amount, kind: TransactionKind) -> Self {
        Self {
            description: description.into(),
            amount,
            kind,
            category: None,
            date: None,
            payment_method: None,
            is_duplicate: false,
        }
    }

    /// Convert into a transaction ready to persist
    ///
    /// Blank or missing category and payment method take the transaction
    /// defaults; a missing date takes `fallback_date`.
    pub fn into_transaction(self, fallback_date: NaiveDateTime) -> Transaction {
        let mut txn = Transaction::new(
            self.description,
            self.amount,
            self.kind,
            self.date.unwrap_or(fallback_date),
        );
        if let Some(category) = self.category {
            if !category.trim().is_empty() {
                txn.category = category;
            }
        }
        if let Some(method) = self.payment_method {
            if !method.trim().is_empty() {
                txn.payment_method = method;
            }
        }
        txn
    }
}
