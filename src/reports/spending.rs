//! Spending Report
//!
//! Category-wise expense breakdown for an optional date range, with each
//! category's share of total spending.

use std::io::Write;

use chrono::NaiveDateTime;

use crate::display::format_percentage;
use crate::error::{UpiqError, UpiqResult};
use crate::models::Amount;
use crate::services::analytics;
use crate::storage::Storage;

/// One category's share of spending in the range
#[derive(Debug, Clone)]
pub struct SpendingRow {
    pub category: String,
    pub amount: Amount,
    /// Share of total expenses, as a percentage
    pub percent: f64,
}

/// Spending Report
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// Inclusive start of the range; `None` means unbounded
    pub start: Option<NaiveDateTime>,
    /// Inclusive end of the range; `None` means unbounded
    pub end: Option<NaiveDateTime>,
    /// Categories sorted by spending, largest first
    pub rows: Vec<SpendingRow>,
    pub total_expenses: Amount,
    pub total_income: Amount,
    /// Transactions of either kind inside the range
    pub transaction_count: usize,
    /// Share of expenses held by the top category
    pub concentration: f64,
}

impl SpendingReport {
    /// Generate a spending report for a date range
    pub fn generate(
        storage: &Storage,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> UpiqResult<Self> {
        let all = storage.transactions.get_all()?;
        let in_range = analytics::filter_by_date_range(&all, start, end);

        let totals = analytics::totals(&in_range);
        let breakdown = analytics::expense_breakdown(&in_range);
        let concentration = analytics::spending_concentration(&in_range);

        let rows = breakdown
            .into_iter()
            .map(|spend| {
                let percent = if totals.expenses.is_positive() {
                    spend.amount.paise() as f64 / totals.expenses.paise() as f64 * 100.0
                } else {
                    0.0
                };
                SpendingRow {
                    category: spend.category,
                    amount: spend.amount,
                    percent,
                }
            })
            .collect();

        Ok(Self {
            start,
            end,
            rows,
            total_expenses: totals.expenses,
            total_income: totals.income,
            transaction_count: in_range.len(),
            concentration,
        })
    }

    fn range_label(&self) -> String {
        match (self.start, self.end) {
            (Some(s), Some(e)) => format!("{} to {}", s.date(), e.date()),
            (Some(s), None) => format!("from {}", s.date()),
            (None, Some(e)) => format!("through {}", e.date()),
            (None, None) => "all time".to_string(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Spending Report - {}\n", self.range_label()));
        output.push_str(&"=".repeat(64));
        output.push('\n');
        output.push_str(&format!("Total Spending: {}\n", self.total_expenses));
        output.push_str(&format!("Total Income:   {}\n", self.total_income));
        output.push_str(&format!("Transactions:   {}\n\n", self.transaction_count));

        if self.rows.is_empty() {
            output.push_str("No expenses in this range.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<32} {:>16} {:>8}\n",
            "Category", "Amount", "Share"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<32} {:>16} {:>8}\n",
                row.category,
                row.amount.to_string(),
                format_percentage(row.percent)
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<32} {:>16}\n",
            "TOTAL",
            self.total_expenses.to_string()
        ));

        if self.concentration > 40.0 {
            output.push_str(&format!(
                "\nTop category holds {} of all spending\n",
                format_percentage(self.concentration)
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> UpiqResult<()> {
        writeln!(writer, "Category,Amount,Percent")
            .map_err(|e| UpiqError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{:.2},{:.2}",
                row.category,
                row.amount.to_rupees(),
                row.percent
            )
            .map_err(|e| UpiqError::Export(e.to_string()))?;
        }

        let total_percent = if self.total_expenses.is_positive() {
            100.0
        } else {
            0.0
        };
        writeln!(
            writer,
            "TOTAL,{:.2},{:.2}",
            self.total_expenses.to_rupees(),
            total_percent
        )
        .map_err(|e| UpiqError::Export(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::UpiqPaths;
    use crate::models::{Transaction, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = UpiqPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn seed(storage: &Storage, description: &str, rupees: i64, kind: TransactionKind, category: &str, day: u32) {
        let date = NaiveDate::from_ymd_opt(2025, 8, day)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let mut txn = Transaction::new(description, Amount::from_rupees(rupees), kind, date);
        txn.category = category.to_string();
        storage.transactions.upsert(txn).unwrap();
    }

    #[test]
    fn test_generate_spending_report() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage, "Salary", 50000, TransactionKind::Income, "Salary", 1);
        seed(&storage, "Rent", 15000, TransactionKind::Expense, "Bills", 2);
        seed(&storage, "Groceries", 5000, TransactionKind::Expense, "Food", 3);

        let report = SpendingReport::generate(&storage, None, None).unwrap();

        assert_eq!(report.total_expenses, Amount::from_rupees(20000));
        assert_eq!(report.total_income, Amount::from_rupees(50000));
        assert_eq!(report.transaction_count, 3);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].category, "Bills");
        assert!((report.rows[0].percent - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_generate_respects_range() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage, "Early", 100, TransactionKind::Expense, "Food", 1);
        seed(&storage, "Late", 200, TransactionKind::Expense, "Food", 20);

        let start = NaiveDate::from_ymd_opt(2025, 8, 10)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let report = SpendingReport::generate(&storage, Some(start), None).unwrap();

        assert_eq!(report.total_expenses, Amount::from_rupees(200));
        assert_eq!(report.transaction_count, 1);
    }

    #[test]
    fn test_terminal_format() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage, "Rent", 15000, TransactionKind::Expense, "Bills", 2);

        let report = SpendingReport::generate(&storage, None, None).unwrap();
        let output = report.format_terminal();

        assert!(output.contains("Spending Report - all time"));
        assert!(output.contains("Bills"));
        assert!(output.contains("TOTAL"));
        // Single category holds everything
        assert!(output.contains("Top category holds 100% of all spending"));
    }

    #[test]
    fn test_terminal_format_empty() {
        let (_temp_dir, storage) = create_test_storage();
        let report = SpendingReport::generate(&storage, None, None).unwrap();
        assert!(report.format_terminal().contains("No expenses in this range."));
    }

    #[test]
    fn test_csv_export() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage, "Rent", 15000, TransactionKind::Expense, "Bills", 2);
        seed(&storage, "Groceries", 5000, TransactionKind::Expense, "Food", 3);

        let report = SpendingReport::generate(&storage, None, None).unwrap();
        let mut csv_output = Vec::new();
        report.export_csv(&mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert!(csv_string.contains("Category,Amount,Percent"));
        assert!(csv_string.contains("Bills,15000.00,75.00"));
        assert!(csv_string.contains("TOTAL,20000.00,100.00"));
    }
}
