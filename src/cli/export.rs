//! CLI commands for data export
//!
//! Provides commands for exporting data in various formats.

use crate::error::UpiqResult;
use crate::export::{csv, json, yaml};
use crate::storage::Storage;
use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (transactions only)
    Csv,
    /// JSON format (full data set)
    Json,
    /// YAML format (full data set, human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all data to a file
    All {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export transactions to CSV
    Transactions {
        /// Output file path
        output: PathBuf,
    },

    /// Export budget limits to CSV
    Budgets {
        /// Output file path
        output: PathBuf,
    },

    /// Show export information without writing files
    Info,
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> UpiqResult<()> {
    match cmd {
        ExportCommands::All {
            output,
            format,
            pretty,
        } => handle_export_all(storage, output, format, pretty),
        ExportCommands::Transactions { output } => handle_export_transactions(storage, output),
        ExportCommands::Budgets { output } => handle_export_budgets(storage, output),
        ExportCommands::Info => handle_export_info(storage),
    }
}

/// Handle full export
fn handle_export_all(
    storage: &Storage,
    output: PathBuf,
    format: ExportFormat,
    pretty: bool,
) -> UpiqResult<()> {
    let file = File::create(&output).map_err(|e| {
        crate::error::UpiqError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => {
            // For CSV, export transactions as the primary data
            csv::export_transactions_csv(storage, &mut writer)?;
            println!("Transactions exported to: {}", output.display());
            println!(
                "Note: CSV format exports transactions only. Use JSON or YAML for full data export."
            );
        }
        ExportFormat::Json => {
            json::export_full_json(storage, &mut writer, pretty)?;
            println!("Full data exported to: {}", output.display());
        }
        ExportFormat::Yaml => {
            yaml::export_full_yaml(storage, &mut writer)?;
            println!("Full data exported to: {}", output.display());
        }
    }

    Ok(())
}

/// Handle transactions export
fn handle_export_transactions(storage: &Storage, output: PathBuf) -> UpiqResult<()> {
    let file = File::create(&output).map_err(|e| {
        crate::error::UpiqError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    csv::export_transactions_csv(storage, &mut writer)?;

    let count = storage.transactions.get_all()?.len();
    println!("Exported {} transactions to: {}", count, output.display());

    Ok(())
}

/// Handle budgets export
fn handle_export_budgets(storage: &Storage, output: PathBuf) -> UpiqResult<()> {
    let file = File::create(&output).map_err(|e| {
        crate::error::UpiqError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    csv::export_budgets_csv(storage, &mut writer)?;

    let count = storage.budgets.get_all()?.len();
    println!("Exported {} budget limits to: {}", count, output.display());

    Ok(())
}

/// Show export information
fn handle_export_info(storage: &Storage) -> UpiqResult<()> {
    let export = json::FullExport::from_storage(storage)?;

    println!("Export Information");
    println!("==================\n");

    println!("Schema Version: {}", export.schema_version);
    println!("App Version:    {}", export.app_version);
    println!();

    println!("Data Summary:");
    println!("  Transactions:  {}", export.metadata.transaction_count);
    println!("  Categories:    {}", export.metadata.category_count);
    println!("  Budgets:       {}", export.metadata.budget_count);
    println!();

    if let Some(earliest) = &export.metadata.earliest_transaction {
        println!("Transaction Date Range:");
        println!("  Earliest: {}", earliest);
    }
    if let Some(latest) = &export.metadata.latest_transaction {
        println!("  Latest:   {}", latest);
    }

    println!("\nAvailable Export Formats:");
    println!("  csv  - CSV format (transactions or budgets)");
    println!("  json - JSON format (full data set, machine-readable)");
    println!("  yaml - YAML format (full data set, human-readable)");

    println!("\nExamples:");
    println!("  upiq export all backup.json --format json --pretty");
    println!("  upiq export transactions txns.csv");
    println!("  upiq export budgets budgets.csv");

    Ok(())
}
