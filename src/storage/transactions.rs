//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::UpiqError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct TransactionData {
    pub transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    transactions: RwLock<HashMap<TransactionId, Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            transactions: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> Result<(), UpiqError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut transactions = self
            .transactions
            .write()
            .map_err(|e| UpiqError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        transactions.clear();
        for transaction in file_data.transactions {
            transactions.insert(transaction.id, transaction);
        }

        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), UpiqError> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| UpiqError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = transactions.values().cloned().collect();
        // Newest first so the file reads like a register
        list.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        let file_data = TransactionData { transactions: list };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, UpiqError> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| UpiqError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(transactions.get(&id).cloned())
    }

    /// Get all transactions, newest first
    pub fn get_all(&self) -> Result<Vec<Transaction>, UpiqError> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| UpiqError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = transactions.values().cloned().collect();
        list.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(list)
    }

    /// Insert or update a transaction
    pub fn upsert(&self, transaction: Transaction) -> Result<(), UpiqError> {
        let mut transactions = self
            .transactions
            .write()
            .map_err(|e| UpiqError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        transactions.insert(transaction.id, transaction);
        Ok(())
    }

    /// Delete a transaction, returning whether it existed
    pub fn delete(&self, id: TransactionId) -> Result<bool, UpiqError> {
        let mut transactions = self
            .transactions
            .write()
            .map_err(|e| UpiqError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(transactions.remove(&id).is_some())
    }

    /// Delete all transactions, returning how many were removed
    pub fn delete_all(&self) -> Result<usize, UpiqError> {
        let mut transactions = self
            .transactions
            .write()
            .map_err(|e| UpiqError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let removed = transactions.len();
        transactions.clear();
        Ok(removed)
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, UpiqError> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| UpiqError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(transactions.len())
    }
}
