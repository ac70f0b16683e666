//! Budget service
//!
//! Setting and deleting per-category monthly limits, and joining them with
//! transaction history to report how each category stands for a month.

use crate::error::{UpiqError, UpiqResult};
use crate::models::budget::percent_used;
use crate::models::{normalize_name, Amount, BudgetLimit, BudgetStatus, Month, Transaction};
use crate::storage::Storage;

/// Service for budget limit management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

/// One category's standing against its limit for a month
#[derive(Debug, Clone)]
pub struct BudgetLine {
    /// Category name with its first-set casing
    pub category: String,
    pub monthly_limit: Amount,
    pub spent: Amount,
    pub status: BudgetStatus,
    /// Percent of the limit used, unclamped
    pub percent: f64,
    /// Percent clamped to 100 for progress bars
    pub bar_percent: f64,
    /// Left to spend before hitting the limit, floored at zero
    pub remaining: Amount,
    /// Amount past the limit, zero when within it
    pub overage: Amount,
}

impl BudgetLine {
    /// Build a line from a stored limit and the spend measured against it
    pub fn new(limit: &BudgetLimit, spent: Amount) -> Self {
        let monthly_limit = limit.monthly_limit;
        let percent = percent_used(spent, monthly_limit);
        let remaining = (monthly_limit - spent).max(Amount::zero());
        let overage = (spent - monthly_limit).max(Amount::zero());

        Self {
            category: limit.category.clone(),
            monthly_limit,
            spent,
            status: BudgetStatus::classify(spent, monthly_limit),
            percent,
            bar_percent: percent.min(100.0),
            remaining,
            overage,
        }
    }

    pub fn is_overspent(&self) -> bool {
        self.spent > self.monthly_limit
    }
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set a category's monthly limit, overwriting any previous one
    pub fn set(&self, category: &str, monthly_limit: Amount) -> UpiqResult<BudgetLimit> {
        let name = category.trim();
        if name.is_empty() {
            return Err(UpiqError::Validation(
                "Budget category name cannot be empty".into(),
            ));
        }
        if !monthly_limit.is_positive() {
            return Err(UpiqError::Validation(format!(
                "Budget amount must be positive, got {}",
                monthly_limit
            )));
        }

        self.storage
            .budgets
            .set(BudgetLimit::new(name, monthly_limit))?;
        self.storage.budgets.save()?;

        // The stored entry keeps the casing of the first set
        let stored = self
            .storage
            .budgets
            .get(name)?
            .unwrap_or_else(|| BudgetLimit::new(name, monthly_limit));
        Ok(stored)
    }

    /// Get a category's limit, if one is set
    pub fn get(&self, category: &str) -> UpiqResult<Option<BudgetLimit>> {
        self.storage.budgets.get(category)
    }

    /// Remove a category's limit
    pub fn delete(&self, category: &str) -> UpiqResult<()> {
        if !self.storage.budgets.delete(category)? {
            return Err(UpiqError::budget_not_found(category.trim()));
        }
        self.storage.budgets.save()?;
        Ok(())
    }

    /// List all stored limits, sorted by category
    pub fn list(&self) -> UpiqResult<Vec<BudgetLimit>> {
        self.storage.budgets.get_all()
    }

    /// Build a budget line for every stored limit against one month's spend
    pub fn month_status(&self, month: Month) -> UpiqResult<Vec<BudgetLine>> {
        let limits = self.storage.budgets.get_all()?;
        if limits.is_empty() {
            return Ok(Vec::new());
        }

        let transactions = self.storage.transactions.get_all()?;
        Ok(limits
            .iter()
            .map(|limit| BudgetLine::new(limit, spent_against(limit, &transactions, month)))
            .collect())
    }

    /// Budget lines where the month's spend exceeds the limit
    pub fn overspending(&self, month: Month) -> UpiqResult<Vec<BudgetLine>> {
        let mut lines = self.month_status(month)?;
        lines.retain(BudgetLine::is_overspent);
        Ok(lines)
    }
}

/// Sum of a month's expenses in the limit's category
fn spent_against(limit: &BudgetLimit, transactions: &[Transaction], month: Month) -> Amount {
    let key = limit.normalized_category();
    transactions
        .iter()
        .filter(|t| t.is_expense() && month.contains(t.date))
        .filter(|t| normalize_name(t.category_label()) == key)
        .map(|t| t.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::UpiqPaths;
    use crate::models::{TransactionKind, Transaction};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = UpiqPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn expense(storage: &Storage, category: &str, rupees: i64, month: u32, day: u32) {
        let date = NaiveDate::from_ymd_opt(2025, month, day)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let mut txn = Transaction::new(
            format!("{} purchase", category),
            Amount::from_rupees(rupees),
            TransactionKind::Expense,
            date,
        );
        txn.category = category.to_string();
        storage.transactions.upsert(txn).unwrap();
    }

    #[test]
    fn test_set_validates_before_io() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let result = service.set("   ", Amount::from_rupees(100));
        assert!(matches!(result, Err(UpiqError::Validation(_))));

        let result = service.set("Food", Amount::zero());
        assert!(matches!(result, Err(UpiqError::Validation(_))));

        assert_eq!(storage.budgets.count().unwrap(), 0);
    }

    #[test]
    fn test_set_trims_and_keeps_first_casing() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set("  Food ", Amount::from_rupees(1000)).unwrap();
        let updated = service.set("FOOD", Amount::from_rupees(2000)).unwrap();

        assert_eq!(updated.category, "Food");
        assert_eq!(updated.monthly_limit, Amount::from_rupees(2000));
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let result = service.delete("Ghost");
        assert!(result.as_ref().err().map(UpiqError::is_not_found).unwrap_or(false));
    }

    #[test]
    fn test_month_status_joins_only_that_month() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set("Food", Amount::from_rupees(1000)).unwrap();
        expense(&storage, "Food", 400, 8, 5);
        expense(&storage, "food", 200, 8, 12);
        expense(&storage, "Food", 900, 7, 20);

        let august = Month::new(2025, 8).unwrap();
        let lines = service.month_status(august).unwrap();
        assert_eq!(lines.len(), 1);

        let line = &lines[0];
        assert_eq!(line.spent, Amount::from_rupees(600));
        assert_eq!(line.remaining, Amount::from_rupees(400));
        assert_eq!(line.overage, Amount::zero());
        assert_eq!(line.status, BudgetStatus::OnTrack);
        assert_eq!(line.percent, 60.0);
    }

    #[test]
    fn test_overspent_line_reports_overage() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set("Food", Amount::from_rupees(1000)).unwrap();
        expense(&storage, "Food", 1200, 8, 3);

        let august = Month::new(2025, 8).unwrap();
        let overspent = service.overspending(august).unwrap();
        assert_eq!(overspent.len(), 1);

        let line = &overspent[0];
        assert_eq!(line.status, BudgetStatus::OverBudget);
        assert_eq!(line.overage, Amount::from_rupees(200));
        assert_eq!(line.remaining, Amount::zero());
        assert_eq!(line.percent, 120.0);
        assert_eq!(line.bar_percent, 100.0);
    }

    #[test]
    fn test_exactly_at_limit_is_over_budget_without_overage() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set("Transport", Amount::from_rupees(500)).unwrap();
        expense(&storage, "Transport", 500, 8, 10);

        let august = Month::new(2025, 8).unwrap();
        let lines = service.month_status(august).unwrap();
        assert_eq!(lines[0].status, BudgetStatus::OverBudget);
        assert_eq!(lines[0].overage, Amount::zero());
        assert!(service.overspending(august).unwrap().is_empty());
    }

    #[test]
    fn test_uncategorized_budget_matches_default_label() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service
            .set("Uncategorized", Amount::from_rupees(300))
            .unwrap();
        // Blank category resolves to the default label
        expense(&storage, "  ", 100, 8, 2);

        let august = Month::new(2025, 8).unwrap();
        let lines = service.month_status(august).unwrap();
        assert_eq!(lines[0].spent, Amount::from_rupees(100));
    }
}
