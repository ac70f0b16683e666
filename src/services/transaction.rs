//! Transaction service
//!
//! Manual transaction entry, filtered listing, and deletion on top of the
//! transaction repository.

use chrono::NaiveDateTime;

use crate::error::{UpiqError, UpiqResult};
use crate::models::date::local_now;
use crate::models::{normalize_name, Amount, Month, Transaction, TransactionId, TransactionKind};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Options for filtering transaction listings
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Keep only transactions in this calendar month
    pub month: Option<Month>,
    /// Keep only this category (case-insensitive, trimmed)
    pub category: Option<String>,
    /// Keep only this kind
    pub kind: Option<TransactionKind>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by month
    pub fn month(mut self, month: Month) -> Self {
        self.month = Some(month);
        self
    }

    /// Filter by category name
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by kind
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Input for creating a transaction by hand
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub description: String,
    pub amount: Amount,
    pub kind: TransactionKind,
    pub category: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub payment_method: Option<String>,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create and persist a transaction
    ///
    /// Missing date defaults to local now; missing category and payment
    /// method take the transaction defaults.
    pub fn create(&self, input: CreateTransactionInput) -> UpiqResult<Transaction> {
        let date = input.date.unwrap_or_else(local_now);
        let mut transaction =
            Transaction::new(input.description.trim(), input.amount, input.kind, date);

        if let Some(category) = input.category {
            let trimmed = category.trim();
            if !trimmed.is_empty() {
                transaction.category = trimmed.to_string();
            }
        }

        if let Some(method) = input.payment_method {
            let trimmed = method.trim();
            if !trimmed.is_empty() {
                transaction.payment_method = trimmed.to_string();
            }
        }

        transaction.validate()?;

        self.storage.transactions.upsert(transaction.clone())?;
        self.storage.transactions.save()?;

        Ok(transaction)
    }

    /// Get a transaction by id
    pub fn get(&self, id: TransactionId) -> UpiqResult<Transaction> {
        self.storage
            .transactions
            .get(id)?
            .ok_or_else(|| UpiqError::transaction_not_found(id.to_string()))
    }

    /// List transactions, newest first, with optional filters
    pub fn list(&self, filter: &TransactionFilter) -> UpiqResult<Vec<Transaction>> {
        let mut transactions = self.storage.transactions.get_all()?;

        if let Some(month) = filter.month {
            transactions.retain(|t| month.contains(t.date));
        }

        if let Some(category) = &filter.category {
            let wanted = normalize_name(category);
            transactions.retain(|t| normalize_name(t.category_label()) == wanted);
        }

        if let Some(kind) = filter.kind {
            transactions.retain(|t| t.kind == kind);
        }

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// Delete a transaction by id
    pub fn delete(&self, id: TransactionId) -> UpiqResult<()> {
        if !self.storage.transactions.delete(id)? {
            return Err(UpiqError::transaction_not_found(id.to_string()));
        }
        self.storage.transactions.save()?;
        Ok(())
    }

    /// Delete every transaction, returning how many were removed
    pub fn delete_all(&self) -> UpiqResult<usize> {
        let removed = self.storage.transactions.delete_all()?;
        self.storage.transactions.save()?;
        Ok(removed)
    }
}
