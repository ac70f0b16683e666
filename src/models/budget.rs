//! Budget limit model
//!
//! One monthly limit per category, keyed by case-insensitive trimmed name.
//! No history: setting overwrites, deleting removes the entry.

use serde::{Deserialize, Serialize};

use super::category::normalize_name;
use super::money::Amount;

/// A stored per-category monthly budget limit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetLimit {
    /// Category name with the casing it was first set with
    pub category: String,
    pub monthly_limit: Amount,
}

impl BudgetLimit {
    pub fn new(category: impl Into<String>, monthly_limit: Amount) -> Self {
        Self {
            category: category.into(),
            monthly_limit,
        }
    }

    /// Normalized category name for lookups
    pub fn normalized_category(&self) -> String {
        normalize_name(&self.category)
    }
}

/// Percentage of a limit consumed, unclamped (120% when overspent by a fifth)
pub fn percent_used(spent: Amount, limit: Amount) -> f64 {
    if limit.is_positive() {
        spent.paise() as f64 / limit.paise() as f64 * 100.0
    } else {
        0.0
    }
}

/// Health of a category against its budget limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    OnTrack,
    Warning,
    OverBudget,
}

impl BudgetStatus {
    /// Classify spend against a limit: under 80% on track, 80% to just
    /// under 100% warning, at or past the limit over budget
    pub fn classify(spent: Amount, limit: Amount) -> Self {
        if !limit.is_positive() {
            // Stored limits are validated positive; anything spent against
            // a non-positive limit is over it
            return if spent.is_positive() {
                Self::OverBudget
            } else {
                Self::OnTrack
            };
        }
        let pct = percent_used(spent, limit);
        if pct < 80.0 {
            Self::OnTrack
        } else if pct < 100.0 {
            Self::Warning
        } else {
            Self::OverBudget
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OnTrack => "On Track",
            Self::Warning => "Warning",
            Self::OverBudget => "Over Budget",
        }
    }
}
