//! CLI commands for reports
//!
//! Provides commands for generating and exporting financial reports.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Subcommand;

use crate::cli::budget::parse_month_or_current;
use crate::error::{UpiqError, UpiqResult};
use crate::models::date::parse_flexible_str;
use crate::models::Month;
use crate::reports::{BudgetOverviewReport, DashboardReport, SpendingReport};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Monthly dashboard: KPIs, trends, budgets, and insights
    #[command(alias = "dash")]
    Dashboard {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Spending by category over a date range
    Spending {
        /// Start date (YYYY-MM-DD), inclusive
        #[arg(short, long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD), inclusive
        #[arg(short, long)]
        to: Option<String>,

        /// Month (YYYY-MM) to report on (alternative to from/to)
        #[arg(short, long)]
        month: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Budget overview for a month
    Budget {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> UpiqResult<()> {
    match cmd {
        ReportCommands::Dashboard { month } => handle_dashboard_report(storage, month),
        ReportCommands::Spending {
            from,
            to,
            month,
            output,
        } => handle_spending_report(storage, from, to, month, output),
        ReportCommands::Budget { month, output } => handle_budget_report(storage, month, output),
    }
}

/// Handle dashboard report
fn handle_dashboard_report(storage: &Storage, month: Option<String>) -> UpiqResult<()> {
    let month = parse_month_or_current(month.as_deref())?;
    let report = DashboardReport::generate(storage, month)?;
    println!("{}", report.format_terminal());
    Ok(())
}

/// Handle spending report
fn handle_spending_report(
    storage: &Storage,
    from: Option<String>,
    to: Option<String>,
    month: Option<String>,
    output: Option<PathBuf>,
) -> UpiqResult<()> {
    // A month argument wins over explicit bounds
    let (start, end) = if let Some(month_str) = month {
        let month = Month::parse(&month_str)
            .map_err(|e| UpiqError::Validation(format!("{}. Use YYYY-MM (e.g., 2025-08)", e)))?;
        (Some(month_start(month)), Some(month_end(month)))
    } else {
        let start = from.as_deref().map(parse_range_start).transpose()?;
        let end = to.as_deref().map(parse_range_end).transpose()?;
        (start, end)
    };

    let report = SpendingReport::generate(storage, start, end)?;

    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            UpiqError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        report.export_csv(&mut writer)?;
        println!("Spending report exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal());
    }

    Ok(())
}

/// Handle budget overview report
fn handle_budget_report(
    storage: &Storage,
    month: Option<String>,
    output: Option<PathBuf>,
) -> UpiqResult<()> {
    let month = parse_month_or_current(month.as_deref())?;
    let report = BudgetOverviewReport::generate(storage, month)?;

    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            UpiqError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        report.export_csv(&mut writer)?;
        println!("Budget report exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal());
    }

    Ok(())
}

fn parse_range_start(s: &str) -> UpiqResult<NaiveDateTime> {
    parse_flexible_str(s).ok_or_else(|| {
        UpiqError::Validation(format!("Invalid start date format: '{}'. Use YYYY-MM-DD", s))
    })
}

/// Parse an inclusive end bound; a date-only value covers its whole day
fn parse_range_end(s: &str) -> UpiqResult<NaiveDateTime> {
    let parsed = parse_flexible_str(s).ok_or_else(|| {
        UpiqError::Validation(format!("Invalid end date format: '{}'. Use YYYY-MM-DD", s))
    })?;

    if parsed.time() == chrono::NaiveTime::MIN {
        Ok(parsed.date().and_hms_opt(23, 59, 59).unwrap_or(parsed))
    } else {
        Ok(parsed)
    }
}

fn month_start(month: Month) -> NaiveDateTime {
    month.start_date().and_time(chrono::NaiveTime::MIN)
}

fn month_end(month: Month) -> NaiveDateTime {
    month
        .end_date()
        .and_hms_opt(23, 59, 59)
        .unwrap_or_else(|| month.end_date().and_time(chrono::NaiveTime::MIN))
}
