//! Category model
//!
//! Categories carry a kind (income or expense, stored lowercase), an
//! optional description, and optional explicit display overrides (color and
//! icon). Name comparisons everywhere in the crate are case-insensitive and
//! trimmed; stored names keep their original casing.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{UpiqError, UpiqResult};

use super::date::local_now;
use super::ids::CategoryId;

/// Canonical form of a category name for lookups and grouping
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Whether a category collects income or expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
}

impl CategoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKind {
    type Err = UpiqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(UpiqError::Validation(format!(
                "Category type must be 'income' or 'expense', got '{}'",
                s
            ))),
        }
    }
}

/// A spending or income category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub kind: CategoryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Explicit palette color (hex value); invalid values fall back to the
    /// hash-based assignment at display time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Explicit icon; invalid values fall back at display time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Category {
    /// Create a category with the given name and kind
    pub fn new(name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            kind,
            description: None,
            color: None,
            icon: None,
            created_at: local_now(),
        }
    }

    /// Normalized name for lookups
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }

    /// Validate category fields
    pub fn validate(&self) -> UpiqResult<()> {
        if self.name.trim().is_empty() {
            return Err(UpiqError::Validation(
                "Category name must not be empty".into(),
            ));
        }
        if self.name.chars().count() > 50 {
            return Err(UpiqError::Validation(
                "Category name too long (max 50 characters)".into(),
            ));
        }
        Ok(())
    }
}
