//! Transaction model
//!
//! A transaction is a single statement line: money in or money out, with a
//! category name attached for budgeting and analytics. Amounts are stored as
//! non-negative magnitudes; `kind` carries the direction.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{UpiqError, UpiqResult};

use super::date::local_now;
use super::ids::TransactionId;
use super::money::Amount;

/// Category assigned when a transaction arrives without one
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Payment method assigned when a transaction arrives without one
pub const DEFAULT_PAYMENT_METHOD: &str = "UPI";

/// Direction of a transaction
///
/// Serialized as "INCOME"/"EXPENSE"; parsing is case-insensitive and accepts
/// the credit/debit spellings bank statements use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "credit" | "cr" => Ok(Self::Income),
            "expense" | "debit" | "dr" => Ok(Self::Expense),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

impl Serialize for TransactionKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TransactionKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for transaction-kind parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError(pub String);

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid transaction type: {}", self.0)
    }
}

impl std::error::Error for ParseKindError {}

/// A persisted transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub description: String,
    pub amount: Amount,
    pub kind: TransactionKind,
    pub category: String,
    pub date: NaiveDateTime,
    pub payment_method: String,
    pub created_at: NaiveDateTime,
}

impl Transaction {
    /// Create a transaction with default category and payment method
    pub fn new(
        description: impl Into<String>,
        amount: Amount,
        kind: TransactionKind,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            description: description.into(),
            amount,
            kind,
            category: DEFAULT_CATEGORY.to_string(),
            date,
            payment_method: DEFAULT_PAYMENT_METHOD.to_string(),
            created_at: local_now(),
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Category name for grouping: trimmed, defaulting when blank
    pub fn category_label(&self) -> &str {
        let trimmed = self.category.trim();
        if trimmed.is_empty() {
            DEFAULT_CATEGORY
        } else {
            trimmed
        }
    }

    /// Validate fields before persisting
    pub fn validate(&self) -> UpiqResult<()> {
        if self.description.trim().is_empty() {
            return Err(UpiqError::Validation(
                "Transaction description must not be empty".into(),
            ));
        }
        if self.amount.is_negative() {
            return Err(UpiqError::Validation(
                "Transaction amount must not be negative".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 14)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_new_defaults() {
        let txn = Transaction::new(
            "Swiggy order",
            Amount::from_paise(25075),
            TransactionKind::Expense,
            sample_date(),
        );
        assert_eq!(txn.category, "Uncategorized");
        assert_eq!(txn.payment_method, "UPI");
        assert!(txn.is_expense());
        assert!(!txn.is_income());
    }

    #[test]
    fn test_kind_parse_is_case_insensitive() {
        assert_eq!(
            "EXPENSE".parse::<TransactionKind>().unwrap(),
            TransactionKind::Expense
        );
        assert_eq!(
            "expense".parse::<TransactionKind>().unwrap(),
            TransactionKind::Expense
        );
        assert_eq!(
            "Income".parse::<TransactionKind>().unwrap(),
            TransactionKind::Income
        );
        assert_eq!(
            " debit ".parse::<TransactionKind>().unwrap(),
            TransactionKind::Expense
        );
        assert_eq!(
            "CR".parse::<TransactionKind>().unwrap(),
            TransactionKind::Income
        );
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_kind_wire_casing() {
        let json = serde_json::to_string(&TransactionKind::Expense).unwrap();
        assert_eq!(json, r#""EXPENSE""#);

        let kind: TransactionKind = serde_json::from_str(r#""income""#).unwrap();
        assert_eq!(kind, TransactionKind::Income);
    }

    #[test]
    fn test_category_label() {
        let mut txn = Transaction::new(
            "Chai",
            Amount::from_paise(1500),
            TransactionKind::Expense,
            sample_date(),
        );
        txn.category = "  Food  ".to_string();
        assert_eq!(txn.category_label(), "Food");

        txn.category = "   ".to_string();
        assert_eq!(txn.category_label(), "Uncategorized");
    }

    #[test]
    fn test_validate() {
        let good = Transaction::new(
            "Rent",
            Amount::from_rupees(15000),
            TransactionKind::Expense,
            sample_date(),
        );
        assert!(good.validate().is_ok());

        let mut bad = good.clone();
        bad.description = "  ".to_string();
        assert!(bad.validate().is_err());

        let mut bad = good;
        bad.amount = Amount::from_paise(-1);
        assert!(bad.validate().is_err());
    }
}
