use anyhow::Result;
use clap::{Parser, Subcommand};

use upiq::cli::{
    handle_budget_command, handle_category_command, handle_export_command, handle_import_command,
    handle_report_command, handle_transaction_command, StatementFormat,
};
use upiq::config::{paths::UpiqPaths, settings::Settings};
use upiq::storage::Storage;

#[derive(Parser)]
#[command(
    name = "upiq",
    version,
    about = "UPI statement reconciliation and spending analytics",
    long_about = "upiq imports UPI app statement exports, deduplicates them against \
                  your transaction history, and tracks spending against monthly \
                  budgets with category breakdowns and trend insights."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Import transactions from a UPI statement export
    Import {
        /// Path to the statement file (CSV or JSON)
        file: String,

        /// Statement format (detected from the file extension if omitted)
        #[arg(short, long, value_enum)]
        format: Option<StatementFormat>,

        /// Show what would be imported without saving
        #[arg(short, long)]
        preview: bool,
    },

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(upiq::cli::TransactionCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(upiq::cli::CategoryCommands),

    /// Budget limit commands
    #[command(subcommand)]
    Budget(upiq::cli::BudgetCommands),

    /// Reports and analytics
    #[command(subcommand)]
    Report(upiq::cli::ReportCommands),

    /// Export data to CSV, JSON, or YAML
    #[command(subcommand)]
    Export(upiq::cli::ExportCommands),

    /// Initialize data directories and default categories
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = UpiqPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Import {
            file,
            format,
            preview,
        }) => {
            handle_import_command(&storage, &file, format, preview)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing upiq at: {}", paths.data_dir().display());
            upiq::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Default categories have been created:");
            println!("  Expense: Food, Groceries, Shopping, Transport, Bills & Utilities,");
            println!("           Entertainment, Health, Other");
            println!("  Income:  Salary, Investment");
            println!();
            println!("Run 'upiq category list' to see all categories.");
        }
        Some(Commands::Config) => {
            println!("upiq Configuration");
            println!("==================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:        {}", settings.currency_symbol);
            println!("  Date format:            {}", settings.date_format);
            println!("  Default payment method: {}", settings.default_payment_method);
        }
        None => {
            println!("upiq - UPI statement reconciliation and spending analytics");
            println!();
            println!("Run 'upiq --help' for usage information.");
            println!("Run 'upiq report dashboard' for a monthly overview.");
        }
    }

    Ok(())
}
