//! Budget limit repository for JSON storage
//!
//! Budget limits are keyed by normalized category name (lowercased,
//! trimmed) so "Food", "food" and " FOOD " address the same limit. The
//! casing of the first `set` is kept for display; later overwrites only
//! replace the amount.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::UpiqError;
use crate::models::{normalize_name, BudgetLimit};

use super::file_io::{read_json, write_json_atomic};

/// Serializable budget data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct BudgetData {
    pub budgets: Vec<BudgetLimit>,
}

/// Repository for budget limit persistence
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<HashMap<String, BudgetLimit>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(HashMap::new()),
        }
    }

    /// Load budget limits from disk
    pub fn load(&self) -> Result<(), UpiqError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| UpiqError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        budgets.clear();
        for limit in file_data.budgets {
            budgets.insert(limit.normalized_category(), limit);
        }

        Ok(())
    }

    /// Save budget limits to disk
    pub fn save(&self) -> Result<(), UpiqError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| UpiqError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = budgets.values().cloned().collect();
        list.sort_by(|a, b| a.normalized_category().cmp(&b.normalized_category()));

        let file_data = BudgetData { budgets: list };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a budget limit by category name
    pub fn get(&self, category: &str) -> Result<Option<BudgetLimit>, UpiqError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| UpiqError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.get(&normalize_name(category)).cloned())
    }

    /// Get all budget limits, sorted by category
    pub fn get_all(&self) -> Result<Vec<BudgetLimit>, UpiqError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| UpiqError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = budgets.values().cloned().collect();
        list.sort_by(|a, b| a.normalized_category().cmp(&b.normalized_category()));
        Ok(list)
    }

    /// Set a budget limit
    ///
    /// Overwriting an existing limit keeps the originally stored category
    /// casing and replaces only the amount.
    pub fn set(&self, limit: BudgetLimit) -> Result<(), UpiqError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| UpiqError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let key = limit.normalized_category();
        match budgets.get_mut(&key) {
            Some(existing) => existing.monthly_limit = limit.monthly_limit,
            None => {
                budgets.insert(key, limit);
            }
        }
        Ok(())
    }

    /// Delete a budget limit by category name, returning whether it existed
    pub fn delete(&self, category: &str) -> Result<bool, UpiqError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| UpiqError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(budgets.remove(&normalize_name(category)).is_some())
    }

    /// Count budget limits
    pub fn count(&self) -> Result<usize, UpiqError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| UpiqError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(budgets.len())
    }
}
