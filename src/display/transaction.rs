//! Transaction display formatting
//!
//! Register and import-preview tables for terminal output.

use tabled::settings::{object::Columns, Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Amount, StatementCandidate, Transaction, TransactionKind};

use super::category::align_last_column_right;

#[derive(Tabled)]
struct RegisterRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format transactions as a register table, signed by kind
pub fn format_transaction_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let rows: Vec<RegisterRow> = transactions
        .iter()
        .map(|t| RegisterRow {
            date: t.date.format("%Y-%m-%d").to_string(),
            description: truncate(&t.description, 40),
            category: t.category_label().to_string(),
            kind: t.kind.to_string(),
            amount: signed_amount(t.amount, t.kind),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    align_last_column_right(&mut table);
    table.to_string()
}

#[derive(Tabled)]
struct PreviewRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Format parsed statement candidates as an import preview table
///
/// Duplicates are flagged so the user sees what a commit would skip.
pub fn format_import_preview(candidates: &[StatementCandidate]) -> String {
    if candidates.is_empty() {
        return "No transactions found in statement.".to_string();
    }

    let rows: Vec<PreviewRow> = candidates
        .iter()
        .map(|c| PreviewRow {
            date: c
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
            description: truncate(&c.description, 40),
            amount: c.amount.to_string(),
            kind: c.kind.to_string(),
            status: if c.is_duplicate {
                "⚠️ Duplicate".to_string()
            } else {
                "✅ New".to_string()
            },
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.with(Modify::new(Columns::single(2)).with(Alignment::right()));
    table.to_string()
}

/// Amount with the sign its kind implies (expenses negative)
fn signed_amount(amount: Amount, kind: TransactionKind) -> String {
    match kind {
        TransactionKind::Expense => (-amount).to_string(),
        TransactionKind::Income => amount.to_string(),
    }
}

/// Truncate a string to a maximum length, appending an ellipsis
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use chrono::NaiveDate;

    fn sample_transaction(description: &str, rupees: i64, kind: TransactionKind) -> Transaction {
        Transaction::new(
            description,
            Amount::from_rupees(rupees),
            kind,
            NaiveDate::from_ymd_opt(2025, 8, 14)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_empty_register() {
        let output = format_transaction_register(&[]);
        assert!(output.contains("No transactions found"));
    }

    #[test]
    fn test_register_signs_expenses() {
        let txns = vec![
            sample_transaction("Swiggy order", 250, TransactionKind::Expense),
            sample_transaction("Salary credit", 50000, TransactionKind::Income),
        ];

        let output = format_transaction_register(&txns);
        assert!(output.contains("Swiggy order"));
        assert!(output.contains("-₹250.00"));
        assert!(output.contains("₹50,000.00"));
    }

    #[test]
    fn test_preview_marks_duplicates() {
        let mut dup = StatementCandidate::new(
            "UPI-ZOMATO",
            Amount::from_rupees(300),
            TransactionKind::Expense,
        );
        dup.is_duplicate = true;
        let fresh = StatementCandidate::new(
            "UPI-IRCTC",
            Amount::from_rupees(1200),
            TransactionKind::Expense,
        );

        let output = format_import_preview(&[dup, fresh]);
        assert!(output.contains("Duplicate"));
        assert!(output.contains("New"));
        // Candidates without dates render a placeholder
        assert!(output.contains('-'));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10), "Short");
        let result = truncate("A very long description that needs a cut", 10);
        assert_eq!(result, "A very ...");
    }
}
