//! Dashboard Report
//!
//! The at-a-glance view: balance/income/expense KPIs with month-over-month
//! trends, a trailing monthly flow table, budget standing, insights, and
//! the most recent activity.

use crate::display::{format_bar, format_percentage};
use crate::error::UpiqResult;
use crate::models::{Month, Transaction};
use crate::services::analytics::{
    self, Insight, MonthOverMonth, TransactionTotals, TrendDirection,
};
use crate::services::budget::{BudgetLine, BudgetService};
use crate::storage::Storage;

/// How many trailing months the flow table covers
const FLOW_MONTHS: u32 = 6;

/// How many recent transactions to show
const RECENT_LIMIT: usize = 5;

/// Dashboard Report
#[derive(Debug, Clone)]
pub struct DashboardReport {
    /// Reference month for trends and budget standing
    pub month: Month,
    /// Totals over the full history
    pub totals: TransactionTotals,
    pub savings_rate: f64,
    pub savings_direction: TrendDirection,
    /// This month's expenses against last month's
    pub expense_trend: MonthOverMonth,
    /// Income and expenses per trailing month, oldest first
    pub flow: Vec<analytics::MonthlyFlow>,
    pub budget_lines: Vec<BudgetLine>,
    pub insights: Vec<Insight>,
    /// Newest transactions first
    pub recent: Vec<Transaction>,
    pub transaction_count: usize,
}

impl DashboardReport {
    /// Generate the dashboard for a reference month
    pub fn generate(storage: &Storage, month: Month) -> UpiqResult<Self> {
        let transactions = storage.transactions.get_all()?;

        let totals = analytics::totals(&transactions);
        let savings_rate = analytics::savings_rate(&totals);
        let savings_direction = analytics::savings_trend(savings_rate);
        let expense_trend = analytics::expense_month_over_month(&transactions, month);
        let flow = analytics::monthly_flow_series(&transactions, FLOW_MONTHS, month);

        let budget_lines = BudgetService::new(storage).month_status(month)?;
        let overspending: Vec<BudgetLine> = budget_lines
            .iter()
            .filter(|l| l.is_overspent())
            .cloned()
            .collect();
        let insights = analytics::generate_insights(&transactions, &overspending, month);

        let recent = transactions.iter().take(RECENT_LIMIT).cloned().collect();

        Ok(Self {
            month,
            totals,
            savings_rate,
            savings_direction,
            expense_trend,
            flow,
            budget_lines,
            insights,
            recent,
            transaction_count: transactions.len(),
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Dashboard - {}\n", self.month.label()));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if self.transaction_count == 0 {
            output.push_str(
                "No transactions yet. Import a statement or add one to get started.\n",
            );
            return output;
        }

        output.push_str(&format!("Balance:       {}\n", self.totals.balance));
        output.push_str(&format!("Income:        {}\n", self.totals.income));
        output.push_str(&format!(
            "Expenses:      {}  {}\n",
            self.totals.expenses,
            trend_suffix(&self.expense_trend)
        ));
        output.push_str(&format!(
            "Savings Rate:  {}  {}\n",
            format_percentage(self.savings_rate),
            direction_arrow(self.savings_direction)
        ));

        output.push_str(&format!("\nMonthly Flow (last {} months)\n", FLOW_MONTHS));
        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>16} {:>16}\n",
            "Month", "Income", "Expenses"
        ));
        for flow in &self.flow {
            output.push_str(&format!(
                "{:<16} {:>16} {:>16}\n",
                flow.month.label(),
                flow.income.to_string(),
                flow.expenses.to_string()
            ));
        }

        if !self.budget_lines.is_empty() {
            output.push_str("\nBudget Status\n");
            output.push_str(&"-".repeat(72));
            output.push('\n');
            for line in &self.budget_lines {
                output.push_str(&format!(
                    "{:<18} {} {:>6}  {}\n",
                    line.category,
                    format_bar(line.bar_percent, 100.0, 12),
                    format_percentage(line.percent),
                    line.status.label()
                ));
            }
        }

        if !self.insights.is_empty() {
            output.push_str("\nFinancial Insights\n");
            output.push_str(&"-".repeat(72));
            output.push('\n');
            for insight in &self.insights {
                output.push_str(&format!(
                    "[{:<5}] {}: {}\n",
                    insight.severity.label(),
                    insight.title,
                    insight.detail
                ));
            }
        }

        if !self.recent.is_empty() {
            output.push_str("\nRecent Activity\n");
            output.push_str(&"-".repeat(72));
            output.push('\n');
            for txn in &self.recent {
                let amount = if txn.is_expense() {
                    (-txn.amount).to_string()
                } else {
                    txn.amount.to_string()
                };
                output.push_str(&format!(
                    "{:<12} {:<32} {:>16}\n",
                    txn.date.format("%Y-%m-%d"),
                    txn.description,
                    amount
                ));
            }
        }

        output
    }
}

fn trend_suffix(mom: &MonthOverMonth) -> String {
    match (mom.direction, mom.change_percent) {
        (TrendDirection::Up, Some(change)) => format!("↑ {:.1}% vs last month", change),
        (TrendDirection::Down, Some(change)) => format!("↓ {:.1}% vs last month", change.abs()),
        (TrendDirection::Up, None) => "↑ new spending this month".to_string(),
        _ => "No change vs last month".to_string(),
    }
}

fn direction_arrow(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::Up => "↑",
        TrendDirection::Down => "↓",
        TrendDirection::Flat => "→",
    }
}
