//! CLI command handler for statement import
//!
//! Parses a statement file, flags duplicates against stored transactions,
//! and commits the rest as a batch.

use std::path::Path;

use clap::ValueEnum;

use crate::display::transaction::format_import_preview;
use crate::error::{UpiqError, UpiqResult};
use crate::services::statement::{parse_csv_statement, parse_extraction_json};
use crate::services::{dedup, ImportService};
use crate::storage::Storage;

/// Statement file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatementFormat {
    /// Bank CSV statement
    Csv,
    /// Extraction-service JSON report
    Json,
}

/// Pick a format from the file extension
fn detect_format(path: &Path) -> Option<StatementFormat> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => Some(StatementFormat::Csv),
        Some(ext) if ext.eq_ignore_ascii_case("json") => Some(StatementFormat::Json),
        _ => None,
    }
}

/// Handle the import command
pub fn handle_import_command(
    storage: &Storage,
    file: &str,
    format: Option<StatementFormat>,
    preview: bool,
) -> UpiqResult<()> {
    let path = Path::new(file);
    if !path.exists() {
        return Err(UpiqError::Io(format!("File not found: {}", file)));
    }

    let format = format.or_else(|| detect_format(path)).ok_or_else(|| {
        UpiqError::Validation(format!(
            "Cannot tell the statement format of '{}'; pass --format csv or --format json",
            file
        ))
    })?;

    let content = std::fs::read_to_string(path)
        .map_err(|e| UpiqError::Io(format!("Failed to read file: {}", e)))?;

    let mut candidates = match format {
        StatementFormat::Csv => parse_csv_statement(&content)?,
        StatementFormat::Json => parse_extraction_json(&content)?,
    };

    if candidates.is_empty() {
        println!("No transactions found in statement.");
        return Ok(());
    }

    // Flag rows already in storage before anything is written
    let existing = storage.transactions.get_all()?;
    dedup::mark_duplicates(&mut candidates, &existing);

    let new_count = candidates.iter().filter(|c| !c.is_duplicate).count();
    let dup_count = candidates.len() - new_count;

    println!("Import Preview");
    println!("{}", "=".repeat(40));
    println!("  New transactions:   {}", new_count);
    println!("  Duplicates (skip):  {}", dup_count);
    println!();

    if preview {
        print!("{}", format_import_preview(&candidates));
        println!();
        println!();
        println!("Preview only; nothing was saved. Re-run without --preview to import.");
        return Ok(());
    }

    if new_count == 0 {
        println!("No new transactions to import.");
        return Ok(());
    }

    // Show first few new transactions
    println!("First transactions to import:");
    for candidate in candidates.iter().filter(|c| !c.is_duplicate).take(5) {
        println!(
            "  {} {} {}",
            candidate
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
            candidate.description,
            candidate.amount
        );
    }
    if new_count > 5 {
        println!("  ... and {} more", new_count - 5);
    }
    println!();

    let summary = ImportService::new(storage).commit(candidates)?;

    println!("Import Complete!");
    println!("  Imported:    {}", summary.saved);
    println!("  Skipped:     {}", summary.duplicates);
    if summary.has_failures() {
        println!("  Failed:      {}", summary.failures.len());
        for failure in &summary.failures {
            println!("    Item {}: {}", failure.index + 1, failure.error);
        }
        return Err(UpiqError::PartialBatch {
            saved: summary.saved,
            failed: summary.failures.len(),
        });
    }

    Ok(())
}
