//! Budget Overview Report
//!
//! One row per stored budget limit showing the month's spend, what is
//! left, a progress bar, and the On Track / Warning / Over Budget status.

use std::io::Write;

use crate::display::{format_bar, format_percentage};
use crate::error::{UpiqError, UpiqResult};
use crate::models::{Amount, Month};
use crate::services::budget::{BudgetLine, BudgetService};
use crate::storage::Storage;

/// Budget Overview Report
#[derive(Debug, Clone)]
pub struct BudgetOverviewReport {
    /// The month this report covers
    pub month: Month,
    /// One line per stored limit, sorted by category
    pub lines: Vec<BudgetLine>,
    /// Sum of all limits
    pub total_limit: Amount,
    /// Sum of all spending against those limits
    pub total_spent: Amount,
}

impl BudgetOverviewReport {
    /// Generate a budget overview for a month
    pub fn generate(storage: &Storage, month: Month) -> UpiqResult<Self> {
        let lines = BudgetService::new(storage).month_status(month)?;
        let total_limit = lines.iter().map(|l| l.monthly_limit).sum();
        let total_spent = lines.iter().map(|l| l.spent).sum();

        Ok(Self {
            month,
            lines,
            total_limit,
            total_spent,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Budget Overview - {}\n", self.month.label()));
        output.push_str(&"=".repeat(96));
        output.push('\n');

        if self.lines.is_empty() {
            output.push_str("No budgets set. Use 'budget set <category> <amount>' to add one.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<18} {:>14} {:>14} {:>14}  {:<16} {:>6}  {}\n",
            "Category", "Limit", "Spent", "Remaining", "Progress", "Used", "Status"
        ));
        output.push_str(&"-".repeat(96));
        output.push('\n');

        for line in &self.lines {
            output.push_str(&format!(
                "{:<18} {:>14} {:>14} {:>14}  {} {:>6}  {}\n",
                line.category,
                line.monthly_limit.to_string(),
                line.spent.to_string(),
                line.remaining.to_string(),
                format_bar(line.bar_percent, 100.0, 16),
                format_percentage(line.percent),
                line.status.label()
            ));
        }

        output.push_str(&"-".repeat(96));
        output.push('\n');
        output.push_str(&format!(
            "{:<18} {:>14} {:>14}\n",
            "TOTAL",
            self.total_limit.to_string(),
            self.total_spent.to_string()
        ));

        let overspent = self.overspent_count();
        if overspent > 0 {
            let noun = if overspent > 1 { "categories" } else { "category" };
            output.push_str(&format!("\n⚠️  {} {} over budget\n", overspent, noun));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> UpiqResult<()> {
        writeln!(
            writer,
            "Month,Category,Limit,Spent,Remaining,Overage,Percent,Status"
        )
        .map_err(|e| UpiqError::Export(e.to_string()))?;

        for line in &self.lines {
            writeln!(
                writer,
                "{},{},{:.2},{:.2},{:.2},{:.2},{:.2},{}",
                self.month,
                line.category,
                line.monthly_limit.to_rupees(),
                line.spent.to_rupees(),
                line.remaining.to_rupees(),
                line.overage.to_rupees(),
                line.percent,
                line.status.label()
            )
            .map_err(|e| UpiqError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "{},TOTAL,{:.2},{:.2},,,,",
            self.month,
            self.total_limit.to_rupees(),
            self.total_spent.to_rupees()
        )
        .map_err(|e| UpiqError::Export(e.to_string()))?;

        Ok(())
    }

    /// Count of categories past their limit
    pub fn overspent_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_overspent()).count()
    }
}
