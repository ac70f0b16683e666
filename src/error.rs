//! Error types for upiq
//!
//! One error enum for the whole crate, built on thiserror. Import batches
//! deliberately do not abort on a single bad item; per-item failures are
//! collected into the batch summary and only surface as `PartialBatch`
//! when a caller wants a failing exit status.

use thiserror::Error;

/// The main error type for upiq operations
#[derive(Error, Debug)]
pub enum UpiqError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors, rejected before any I/O
    #[error("Validation error: {0}")]
    Validation(String),

    /// A call to an external collaborator (extraction report, storage file)
    /// failed; surfaced to the caller, never retried here
    #[error("Transport error: {0}")]
    Transport(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Some items of an import batch failed; the rest were still attempted
    #[error("Import batch partially failed: {saved} saved, {failed} failed")]
    PartialBatch { saved: usize, failed: usize },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors (lock poisoning, repository state)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl UpiqError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for budgets
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: identifier.into(),
        }
    }

    /// Create a duplicate-category error
    pub fn category_exists(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// From impls for common error types

impl From<std::io::Error> for UpiqError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for UpiqError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for upiq operations
pub type UpiqResult<T> = Result<T, UpiqError>;
