//! JSON Export functionality
//!
//! Exports the complete data set to JSON format with schema versioning.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{UpiqError, UpiqResult};
use crate::models::date::local_now;
use crate::models::{BudgetLimit, Category, Transaction};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full data export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: NaiveDateTime,

    /// Application version that created the export
    pub app_version: String,

    /// All transactions
    pub transactions: Vec<Transaction>,

    /// All categories
    pub categories: Vec<Category>,

    /// All budget limits
    pub budgets: Vec<BudgetLimit>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub category_count: usize,
    pub budget_count: usize,

    /// Date of the earliest transaction
    pub earliest_transaction: Option<String>,

    /// Date of the latest transaction
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> UpiqResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let categories = storage.categories.get_all()?;
        let budgets = storage.budgets.get_all()?;

        let earliest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .min()
            .map(|d| d.to_string());

        let latest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .max()
            .map(|d| d.to_string());

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            category_count: categories.len(),
            budget_count: budgets.len(),
            earliest_transaction,
            latest_transaction,
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: local_now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions,
            categories,
            budgets,
            metadata,
        })
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        for txn in &self.transactions {
            txn.validate()
                .map_err(|e| format!("Transaction {}: {}", txn.id, e))?;
        }

        for category in &self.categories {
            category
                .validate()
                .map_err(|e| format!("Category {}: {}", category.id, e))?;
        }

        for budget in &self.budgets {
            if budget.category.trim().is_empty() {
                return Err("Budget entry with empty category name".to_string());
            }
        }

        Ok(())
    }
}

/// Export the full data set to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> UpiqResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| UpiqError::Export(e.to_string()))?;

    Ok(())
}

/// Read a JSON export back (for verification/restore)
pub fn import_from_json(json_str: &str) -> UpiqResult<FullExport> {
    let export: FullExport = serde_json::from_str(json_str)
        .map_err(|e| UpiqError::Transport(format!("Unreadable export file: {}", e)))?;

    export.validate().map_err(UpiqError::Validation)?;

    Ok(export)
}
