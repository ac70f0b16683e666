//! End-to-end CLI tests
//!
//! Each test runs the binary against its own temp data directory via
//! the UPIQ_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn upiq(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("upiq").unwrap();
    cmd.env("UPIQ_DATA_DIR", dir.path());
    cmd
}

#[test]
fn no_args_prints_banner() {
    let dir = TempDir::new().unwrap();

    upiq(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "upiq - UPI statement reconciliation and spending analytics",
        ))
        .stdout(predicate::str::contains("upiq --help"));
}

#[test]
fn init_seeds_default_categories() {
    let dir = TempDir::new().unwrap();

    upiq(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    upiq(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Salary"));
}

#[test]
fn add_and_list_transactions() {
    let dir = TempDir::new().unwrap();

    upiq(&dir)
        .args([
            "transaction",
            "add",
            "Chai at office canteen",
            "15",
            "-c",
            "Food",
            "-d",
            "2025-08-14",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created transaction:"))
        .stdout(predicate::str::contains("Category: Food"));

    upiq(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chai at office canteen"))
        .stdout(predicate::str::contains("Showing 1 transactions"));
}

#[test]
fn add_rejects_bad_amount() {
    let dir = TempDir::new().unwrap();

    upiq(&dir)
        .args(["transaction", "add", "Chai", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount format"));
}

#[test]
fn list_filters_by_month() {
    let dir = TempDir::new().unwrap();

    upiq(&dir)
        .args(["transaction", "add", "July spend", "100", "-d", "2025-07-10"])
        .assert()
        .success();
    upiq(&dir)
        .args(["transaction", "add", "August spend", "200", "-d", "2025-08-10"])
        .assert()
        .success();

    upiq(&dir)
        .args(["transaction", "list", "-m", "2025-08"])
        .assert()
        .success()
        .stdout(predicate::str::contains("August spend"))
        .stdout(predicate::str::contains("July spend").not())
        .stdout(predicate::str::contains("Showing 1 transactions"));
}

#[test]
fn clear_requires_yes_flag() {
    let dir = TempDir::new().unwrap();

    upiq(&dir)
        .args(["transaction", "add", "Chai", "15"])
        .assert()
        .success();

    upiq(&dir)
        .args(["transaction", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Re-run with --yes to confirm."));

    upiq(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 transactions"));

    upiq(&dir)
        .args(["transaction", "clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 transactions."));

    upiq(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 0 transactions"));
}

#[test]
fn budget_set_list_and_status() {
    let dir = TempDir::new().unwrap();

    upiq(&dir)
        .args(["budget", "set", "Food", "5000"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Budget set: Food at ₹5,000.00 per month",
        ));

    upiq(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("₹5,000.00"));

    upiq(&dir)
        .args(["transaction", "add", "Swiggy", "1200", "-c", "Food", "-d", "2025-08-10"])
        .assert()
        .success();

    upiq(&dir)
        .args(["budget", "status", "-m", "2025-08"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget Overview - August 2025"))
        .stdout(predicate::str::contains("Food"));
}

#[test]
fn budget_rejects_bad_month() {
    let dir = TempDir::new().unwrap();

    upiq(&dir)
        .args(["budget", "status", "-m", "August"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Use YYYY-MM"));
}

#[test]
fn import_preview_commits_nothing() {
    let dir = TempDir::new().unwrap();
    let statement = dir.path().join("statement.csv");
    std::fs::write(
        &statement,
        "Date,Description,Amount,Type,Category\n\
         2025-08-14,UPI-SWIGGY-BLR,-250.75,debit,Food\n\
         2025-08-01,SALARY AUG,50000.00,credit,Salary\n",
    )
    .unwrap();

    upiq(&dir)
        .args(["import", statement.to_str().unwrap(), "--preview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Import Preview"))
        .stdout(predicate::str::contains("New transactions:   2"))
        .stdout(predicate::str::contains(
            "Preview only; nothing was saved.",
        ));

    upiq(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 0 transactions"));
}

#[test]
fn import_commit_then_reimport_skips_duplicates() {
    let dir = TempDir::new().unwrap();
    let statement = dir.path().join("statement.csv");
    std::fs::write(
        &statement,
        "Date,Description,Amount,Type,Category\n\
         2025-08-14,UPI-SWIGGY-BLR,-250.75,debit,Food\n\
         2025-08-01,SALARY AUG,50000.00,credit,Salary\n",
    )
    .unwrap();

    upiq(&dir)
        .args(["import", statement.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Import Complete!"))
        .stdout(predicate::str::contains("Imported:    2"));

    upiq(&dir)
        .args(["import", statement.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Duplicates (skip):  2"))
        .stdout(predicate::str::contains("No new transactions to import."));

    upiq(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 2 transactions"));
}

#[test]
fn import_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    upiq(&dir)
        .args(["import", "no-such-file.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn import_unknown_extension_needs_format() {
    let dir = TempDir::new().unwrap();
    let statement = dir.path().join("statement.txt");
    std::fs::write(&statement, "2025-08-14,Chai,-15.00\n").unwrap();

    upiq(&dir)
        .args(["import", statement.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--format"));

    upiq(&dir)
        .args([
            "import",
            statement.to_str().unwrap(),
            "--format",
            "csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Import Complete!"));
}

#[test]
fn report_dashboard_runs() {
    let dir = TempDir::new().unwrap();

    upiq(&dir)
        .args(["transaction", "add", "Swiggy", "250", "-c", "Food", "-d", "2025-08-10"])
        .assert()
        .success();
    upiq(&dir)
        .args([
            "transaction",
            "add",
            "Salary",
            "50000",
            "-k",
            "income",
            "-d",
            "2025-08-01",
        ])
        .assert()
        .success();

    upiq(&dir)
        .args(["report", "dashboard", "-m", "2025-08"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard - August 2025"))
        .stdout(predicate::str::contains("Income"));
}

#[test]
fn report_spending_with_range() {
    let dir = TempDir::new().unwrap();

    upiq(&dir)
        .args(["transaction", "add", "Swiggy", "250", "-c", "Food", "-d", "2025-08-10"])
        .assert()
        .success();

    upiq(&dir)
        .args([
            "report",
            "spending",
            "--from",
            "2025-08-01",
            "--to",
            "2025-08-31",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"));
}

#[test]
fn export_json_and_info() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("backup.json");

    upiq(&dir)
        .args(["transaction", "add", "Chai", "15", "-d", "2025-08-14"])
        .assert()
        .success();

    upiq(&dir)
        .args([
            "export",
            "all",
            out.to_str().unwrap(),
            "--format",
            "json",
            "--pretty",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Full data exported to:"));

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.contains("\"schema_version\""));
    assert!(content.contains("Chai"));

    upiq(&dir)
        .args(["export", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Schema Version: 1.0.0"))
        .stdout(predicate::str::contains("Transactions:  1"));
}

#[test]
fn category_add_show_delete() {
    let dir = TempDir::new().unwrap();

    upiq(&dir)
        .args(["category", "add", "Travel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created category: Travel"));

    upiq(&dir)
        .args(["category", "show", "Travel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Travel"));

    upiq(&dir)
        .args(["category", "delete", "Travel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted category: Travel"));
}

#[test]
fn config_shows_paths_and_settings() {
    let dir = TempDir::new().unwrap();

    upiq(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("upiq Configuration"))
        .stdout(predicate::str::contains("Currency symbol:        ₹"));
}
