//! Analytics over transaction history
//!
//! Pure aggregation functions with no storage access. Callers pass the
//! transaction slice (already range-filtered if they want a window) plus a
//! reference month where month-over-month comparisons apply. Category
//! grouping is case-insensitive on trimmed names throughout. Empty input
//! never fails; every function degrades to zero or `None`.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::models::{normalize_name, Amount, Month, Transaction};
use crate::services::budget::BudgetLine;

/// Income, expense, and balance totals over a transaction slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionTotals {
    pub income: Amount,
    pub expenses: Amount,
    pub balance: Amount,
}

/// Sum income and expenses; balance is income minus expenses
pub fn totals(transactions: &[Transaction]) -> TransactionTotals {
    let income = transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();
    let expenses = transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum::<Amount>();

    TransactionTotals {
        income,
        expenses,
        balance: income - expenses,
    }
}

/// Balance as a percentage of income; 0 when there is no income
pub fn savings_rate(totals: &TransactionTotals) -> f64 {
    if totals.income.is_positive() {
        totals.balance.paise() as f64 / totals.income.paise() as f64 * 100.0
    } else {
        0.0
    }
}

/// Income divided by expenses; `None` when there are no expenses
pub fn income_expense_ratio(totals: &TransactionTotals) -> Option<f64> {
    if totals.expenses.is_positive() {
        Some(totals.income.paise() as f64 / totals.expenses.paise() as f64)
    } else {
        None
    }
}

/// One category's summed expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpend {
    /// Display name with the casing seen first in the slice
    pub category: String,
    pub amount: Amount,
}

/// Group expenses by category and sort by amount, largest first
///
/// Blank or missing categories fall into "Uncategorized". Ties keep the
/// order categories were first encountered in.
pub fn expense_breakdown(transactions: &[Transaction]) -> Vec<CategorySpend> {
    let mut seen: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, CategorySpend> = HashMap::new();

    for t in transactions.iter().filter(|t| t.is_expense()) {
        let label = t.category_label();
        let key = normalize_name(label);
        match buckets.get_mut(&key) {
            Some(bucket) => bucket.amount += t.amount,
            None => {
                seen.push(key.clone());
                buckets.insert(
                    key,
                    CategorySpend {
                        category: label.to_string(),
                        amount: t.amount,
                    },
                );
            }
        }
    }

    let mut breakdown: Vec<CategorySpend> = seen
        .into_iter()
        .filter_map(|key| buckets.remove(&key))
        .collect();
    breakdown.sort_by(|a, b| b.amount.cmp(&a.amount));
    breakdown
}

/// The category with the largest expense total, if any expenses exist
pub fn top_spending_category(transactions: &[Transaction]) -> Option<CategorySpend> {
    expense_breakdown(transactions).into_iter().next()
}

/// Share of total expenses held by the top category, as a percentage
pub fn spending_concentration(transactions: &[Transaction]) -> f64 {
    let breakdown = expense_breakdown(transactions);
    let total: Amount = breakdown.iter().map(|c| c.amount).sum();
    match breakdown.first() {
        Some(top) if total.is_positive() => {
            top.amount.paise() as f64 / total.paise() as f64 * 100.0
        }
        _ => 0.0,
    }
}

/// Direction of a compared pair of values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

/// A current-vs-previous-month comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthOverMonth {
    pub current: Amount,
    pub previous: Amount,
    /// Percentage change from the previous month; `None` when the previous
    /// month had nothing to compare against
    pub change_percent: Option<f64>,
    pub direction: TrendDirection,
}

fn compare_months(current: Amount, previous: Amount) -> MonthOverMonth {
    let change_percent = if previous.is_positive() {
        Some((current.paise() - previous.paise()) as f64 / previous.paise() as f64 * 100.0)
    } else {
        None
    };
    let direction = match current.cmp(&previous) {
        Ordering::Greater => TrendDirection::Up,
        Ordering::Less => TrendDirection::Down,
        Ordering::Equal => TrendDirection::Flat,
    };

    MonthOverMonth {
        current,
        previous,
        change_percent,
        direction,
    }
}

/// One category's expense total in `month` against the month before it
pub fn category_month_over_month(
    transactions: &[Transaction],
    category: &str,
    month: Month,
) -> MonthOverMonth {
    let key = normalize_name(category);
    let sum_for = |m: Month| -> Amount {
        transactions
            .iter()
            .filter(|t| t.is_expense() && m.contains(t.date))
            .filter(|t| normalize_name(t.category_label()) == key)
            .map(|t| t.amount)
            .sum()
    };

    compare_months(sum_for(month), sum_for(month.prev()))
}

/// Total expenses in `month` against the month before it
pub fn expense_month_over_month(transactions: &[Transaction], month: Month) -> MonthOverMonth {
    let sum_for = |m: Month| -> Amount {
        transactions
            .iter()
            .filter(|t| t.is_expense() && m.contains(t.date))
            .map(|t| t.amount)
            .sum()
    };

    compare_months(sum_for(month), sum_for(month.prev()))
}

/// Savings-rate direction by absolute thresholds: 20% and up is healthy,
/// 10% holds steady, anything below is slipping
pub fn savings_trend(rate: f64) -> TrendDirection {
    if rate >= 20.0 {
        TrendDirection::Up
    } else if rate >= 10.0 {
        TrendDirection::Flat
    } else {
        TrendDirection::Down
    }
}

/// Income and expense totals for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyFlow {
    pub month: Month,
    pub income: Amount,
    pub expenses: Amount,
}

/// Per-month flow for the trailing `months` calendar months ending at
/// `ending`, oldest first. Months with no activity report zeros.
pub fn monthly_flow_series(
    transactions: &[Transaction],
    months: u32,
    ending: Month,
) -> Vec<MonthlyFlow> {
    if months == 0 {
        return Vec::new();
    }

    let mut month = ending;
    for _ in 1..months {
        month = month.prev();
    }

    let mut series = Vec::with_capacity(months as usize);
    for _ in 0..months {
        let in_month: Vec<Transaction> = transactions
            .iter()
            .filter(|t| month.contains(t.date))
            .cloned()
            .collect();
        let flow = totals(&in_month);
        series.push(MonthlyFlow {
            month,
            income: flow.income,
            expenses: flow.expenses,
        });
        month = month.next();
    }
    series
}

/// Keep transactions whose date lies within the inclusive bounds; a
/// missing bound is unbounded on that side
pub fn filter_by_date_range(
    transactions: &[Transaction],
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| start.map_or(true, |s| t.date >= s))
        .filter(|t| end.map_or(true, |e| t.date <= e))
        .cloned()
        .collect()
}

/// How urgent an insight is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightSeverity {
    Info,
    Warning,
    Alert,
    Positive,
}

impl InsightSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARN",
            Self::Alert => "ALERT",
            Self::Positive => "GOOD",
        }
    }
}

/// A single observation about the finances
#[derive(Debug, Clone)]
pub struct Insight {
    pub severity: InsightSeverity,
    pub title: String,
    pub detail: String,
}

/// Compose insights in priority order: top category, concentration,
/// overspending, income/expense ratio, then a single positive note when
/// nothing else triggered and there is any history at all
pub fn generate_insights(
    transactions: &[Transaction],
    overspending: &[BudgetLine],
    month: Month,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    if let Some(top) = top_spending_category(transactions) {
        let mom = category_month_over_month(transactions, &top.category, month);
        let detail = match (mom.direction, mom.change_percent) {
            (TrendDirection::Up, Some(change)) => {
                format!("Spending ↑ {:.1}% vs last month", change)
            }
            (TrendDirection::Down, Some(change)) => {
                format!("Spending ↓ {:.1}% vs last month", change.abs())
            }
            (TrendDirection::Up, None) => "New spending this month".to_string(),
            _ => "Spending unchanged vs last month".to_string(),
        };
        insights.push(Insight {
            severity: InsightSeverity::Info,
            title: format!("{} is your highest expense", top.category),
            detail,
        });
    }

    let concentration = spending_concentration(transactions);
    if concentration > 40.0 {
        insights.push(Insight {
            severity: InsightSeverity::Warning,
            title: "High spending concentration".to_string(),
            detail: format!("{:.1}% of expenses in one category", concentration),
        });
    }

    if !overspending.is_empty() {
        let names: Vec<&str> = overspending.iter().map(|l| l.category.as_str()).collect();
        let noun = if overspending.len() > 1 {
            "categories"
        } else {
            "category"
        };
        insights.push(Insight {
            severity: InsightSeverity::Alert,
            title: format!("Overspending in {} {}", overspending.len(), noun),
            detail: names.join(", "),
        });
    }

    let overall = totals(transactions);
    if let Some(ratio) = income_expense_ratio(&overall) {
        if ratio > 0.0 && ratio < 1.2 {
            insights.push(Insight {
                severity: InsightSeverity::Warning,
                title: "Expenses are high relative to income".to_string(),
                detail: format!("Income/Expense ratio: {:.2}", ratio),
            });
        }
    }

    if insights.is_empty() && !transactions.is_empty() {
        insights.push(Insight {
            severity: InsightSeverity::Positive,
            title: "Your finances look balanced".to_string(),
            detail: "Keep tracking your expenses to maintain good financial health".to_string(),
        });
    }

    insights
}
