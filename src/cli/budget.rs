//! Budget CLI commands
//!
//! Implements CLI commands for monthly budget limits and status.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{UpiqError, UpiqResult};
use crate::models::{Amount, Month};
use crate::reports::BudgetOverviewReport;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set a monthly limit for a category
    Set {
        /// Category name
        category: String,
        /// Monthly limit in rupees (e.g., "5000" or "5000.00")
        amount: String,
    },

    /// List budget limits
    List,

    /// Remove a budget limit
    Delete {
        /// Category name
        category: String,
    },

    /// Show budget status for a month
    Status {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> UpiqResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Set { category, amount } => {
            let amount = Amount::parse(&amount).map_err(|e| {
                UpiqError::Validation(format!(
                    "Invalid amount format: '{}'. Use format like '5000' or '5000.00'. Error: {}",
                    amount, e
                ))
            })?;

            let limit = service.set(&category, amount)?;
            println!(
                "Budget set: {} at {} per month",
                limit.category, limit.monthly_limit
            );
        }

        BudgetCommands::List => {
            let limits = service.list()?;

            if limits.is_empty() {
                println!("No budget limits set.");
                println!();
                println!("Run 'upiq budget set <category> <amount>' to add one.");
                return Ok(());
            }

            println!("{:<24} {:>14}", "Category", "Monthly Limit");
            println!("{}", "-".repeat(40));
            for limit in &limits {
                println!(
                    "{:<24} {:>14}",
                    limit.category,
                    limit.monthly_limit.to_string()
                );
            }
        }

        BudgetCommands::Delete { category } => {
            service.delete(&category)?;
            println!("Deleted budget limit for: {}", category.trim());
        }

        BudgetCommands::Status { month, output } => {
            let month = parse_month_or_current(month.as_deref())?;
            let report = BudgetOverviewReport::generate(storage, month)?;

            if let Some(path) = output {
                let file = File::create(&path).map_err(|e| {
                    UpiqError::Export(format!("Failed to create file {}: {}", path.display(), e))
                })?;
                let mut writer = BufWriter::new(file);
                report.export_csv(&mut writer)?;
                println!("Budget status exported to: {}", path.display());
            } else {
                println!("{}", report.format_terminal());
            }
        }
    }

    Ok(())
}

/// Parse a YYYY-MM argument, defaulting to the current month
pub(crate) fn parse_month_or_current(month: Option<&str>) -> UpiqResult<Month> {
    match month {
        Some(s) => Month::parse(s)
            .map_err(|e| UpiqError::Validation(format!("{}. Use YYYY-MM (e.g., 2025-08)", e))),
        None => Ok(Month::current()),
    }
}
