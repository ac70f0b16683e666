//! Transaction CLI commands
//!
//! Implements CLI commands for manual transaction management.

use clap::Subcommand;

use crate::display::transaction::format_transaction_register;
use crate::error::{UpiqError, UpiqResult};
use crate::models::date::parse_flexible_str;
use crate::models::{Amount, Month, Transaction, TransactionId, TransactionKind};
use crate::services::{CreateTransactionInput, TransactionFilter, TransactionService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Description (e.g., "Swiggy order")
        description: String,
        /// Amount in rupees (e.g., "250" or "250.75")
        amount: String,
        /// Transaction type (income or expense)
        #[arg(short, long, default_value = "expense")]
        kind: String,
        /// Category name
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to now
        #[arg(short, long)]
        date: Option<String>,
        /// Payment method
        #[arg(short, long)]
        method: Option<String>,
    },
    /// List transactions
    List {
        /// Filter by month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Filter by category name
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by type (income or expense)
        #[arg(short, long)]
        kind: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID (full, or the short form shown in listings)
        id: String,
    },
    /// Delete all transactions
    Clear {
        /// Confirm deleting everything
        #[arg(long)]
        yes: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(storage: &Storage, cmd: TransactionCommands) -> UpiqResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            kind,
            category,
            date,
            method,
        } => {
            let amount = Amount::parse(&amount).map_err(|e| {
                UpiqError::Validation(format!(
                    "Invalid amount format: '{}'. Use format like '250' or '250.75'. Error: {}",
                    amount, e
                ))
            })?;

            let kind = kind
                .parse::<TransactionKind>()
                .map_err(|e| UpiqError::Validation(e.to_string()))?;

            let date = match date {
                Some(date_str) => Some(parse_flexible_str(&date_str).ok_or_else(|| {
                    UpiqError::Validation(format!(
                        "Invalid date format: '{}'. Use YYYY-MM-DD",
                        date_str
                    ))
                })?),
                None => None,
            };

            let txn = service.create(CreateTransactionInput {
                description,
                amount,
                kind,
                category,
                date,
                payment_method: method,
            })?;

            println!("Created transaction:");
            println!("  ID:       {}", txn.id);
            println!("  Date:     {}", txn.date.format("%Y-%m-%d"));
            println!("  Amount:   {}", txn.amount);
            println!("  Type:     {}", txn.kind);
            println!("  Category: {}", txn.category);
        }

        TransactionCommands::List {
            month,
            category,
            kind,
            limit,
        } => {
            let mut filter = TransactionFilter::new().limit(limit);

            if let Some(month_str) = month {
                let month = Month::parse(&month_str).map_err(|e| {
                    UpiqError::Validation(format!("{}. Use YYYY-MM (e.g., 2025-08)", e))
                })?;
                filter = filter.month(month);
            }

            if let Some(category) = category {
                filter = filter.category(category);
            }

            if let Some(kind_str) = kind {
                let kind = kind_str
                    .parse::<TransactionKind>()
                    .map_err(|e| UpiqError::Validation(e.to_string()))?;
                filter = filter.kind(kind);
            }

            let transactions = service.list(&filter)?;
            print!("{}", format_transaction_register(&transactions));
            println!("\nShowing {} transactions", transactions.len());
        }

        TransactionCommands::Delete { id } => {
            let txn = resolve_transaction(storage, &id)?;
            service.delete(txn.id)?;
            println!(
                "Deleted transaction: {} ({} {})",
                txn.id,
                txn.date.format("%Y-%m-%d"),
                txn.description
            );
        }

        TransactionCommands::Clear { yes } => {
            if !yes {
                let count = storage.transactions.count()?;
                println!("This would delete all {} transactions.", count);
                println!("Re-run with --yes to confirm.");
                return Ok(());
            }

            let removed = service.delete_all()?;
            println!("Deleted {} transactions.", removed);
        }
    }

    Ok(())
}

/// Resolve a transaction from a full ID or the truncated form listings show
fn resolve_transaction(storage: &Storage, identifier: &str) -> UpiqResult<Transaction> {
    if let Ok(id) = identifier.parse::<TransactionId>() {
        return TransactionService::new(storage).get(id);
    }

    let needle = identifier
        .strip_prefix("txn-")
        .unwrap_or(identifier)
        .to_lowercase();
    if needle.is_empty() {
        return Err(UpiqError::transaction_not_found(identifier));
    }

    let mut matches: Vec<Transaction> = storage
        .transactions
        .get_all()?
        .into_iter()
        .filter(|t| t.id.as_uuid().to_string().starts_with(&needle))
        .collect();

    if matches.len() > 1 {
        return Err(UpiqError::Validation(format!(
            "Transaction ID '{}' is ambiguous ({} matches); use a longer prefix",
            identifier,
            matches.len()
        )));
    }

    matches
        .pop()
        .ok_or_else(|| UpiqError::transaction_not_found(identifier))
}
