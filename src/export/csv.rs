//! CSV Export functionality
//!
//! Exports transactions and budget limits to spreadsheet-compatible CSV.

use std::io::Write;

use crate::error::{UpiqError, UpiqResult};
use crate::storage::Storage;

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: &mut W) -> UpiqResult<()> {
    writeln!(
        writer,
        "ID,Date,Description,Category,Type,Amount,Payment Method"
    )
    .map_err(|e| UpiqError::Export(e.to_string()))?;

    let transactions = storage.transactions.get_all()?;

    for txn in transactions {
        writeln!(
            writer,
            "{},{},{},{},{},{:.2},{}",
            txn.id,
            txn.date.format("%Y-%m-%d %H:%M:%S"),
            escape_csv(&txn.description),
            escape_csv(txn.category_label()),
            txn.kind.as_str(),
            txn.amount.to_rupees(),
            escape_csv(&txn.payment_method)
        )
        .map_err(|e| UpiqError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export budget limits to CSV
pub fn export_budgets_csv<W: Write>(storage: &Storage, writer: &mut W) -> UpiqResult<()> {
    writeln!(writer, "Category,Monthly Limit")
        .map_err(|e| UpiqError::Export(e.to_string()))?;

    for limit in storage.budgets.get_all()? {
        writeln!(
            writer,
            "{},{:.2}",
            escape_csv(&limit.category),
            limit.monthly_limit.to_rupees()
        )
        .map_err(|e| UpiqError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
