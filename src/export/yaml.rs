//! YAML Export functionality
//!
//! Exports the complete data set to YAML format for human-readable backup.

use std::io::Write;

use crate::error::{UpiqError, UpiqResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export the full data set to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> UpiqResult<()> {
    let export = FullExport::from_storage(storage)?;

    // Add a header comment
    writeln!(writer, "# upiq Full Data Export")
        .map_err(|e| UpiqError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| UpiqError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| UpiqError::Export(e.to_string()))?;
    writeln!(writer, "#").map_err(|e| UpiqError::Export(e.to_string()))?;
    writeln!(
        writer,
        "# This file can be used to restore your transaction history."
    )
    .map_err(|e| UpiqError::Export(e.to_string()))?;
    writeln!(
        writer,
        "# Keep it secure - it contains all your financial data."
    )
    .map_err(|e| UpiqError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| UpiqError::Export(e.to_string()))?;

    // Serialize to YAML
    serde_yaml::to_writer(writer, &export).map_err(|e| UpiqError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a YAML export
pub fn import_from_yaml(yaml_str: &str) -> UpiqResult<FullExport> {
    let export: FullExport = serde_yaml::from_str(yaml_str)
        .map_err(|e| UpiqError::Transport(format!("Unreadable export file: {}", e)))?;

    export.validate().map_err(UpiqError::Validation)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::UpiqPaths;
    use crate::models::{Amount, BudgetLimit, Transaction, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = UpiqPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn sample_date() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 14)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_yaml_export() {
        let (_temp_dir, storage) = create_test_storage();

        let txn = Transaction::new(
            "Metro recharge",
            Amount::from_rupees(200),
            TransactionKind::Expense,
            sample_date(),
        );
        storage.transactions.upsert(txn).unwrap();
        storage
            .budgets
            .set(BudgetLimit::new("Travel", Amount::from_rupees(3000)))
            .unwrap();

        let mut yaml_output = Vec::new();
        export_full_yaml(&storage, &mut yaml_output).unwrap();

        let yaml_string = String::from_utf8(yaml_output).unwrap();

        // Verify header comments
        assert!(yaml_string.contains("# upiq Full Data Export"));

        // Verify data
        assert!(yaml_string.contains("Metro recharge"));
        assert!(yaml_string.contains("Travel"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let (_temp_dir, storage) = create_test_storage();

        let txn = Transaction::new(
            "Metro recharge",
            Amount::from_rupees(200),
            TransactionKind::Expense,
            sample_date(),
        );
        storage.transactions.upsert(txn).unwrap();

        let mut yaml_output = Vec::new();
        export_full_yaml(&storage, &mut yaml_output).unwrap();

        let yaml_string = String::from_utf8(yaml_output).unwrap();

        // Skip the comment lines for parsing
        let yaml_content: String = yaml_string
            .lines()
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");

        let imported = import_from_yaml(&yaml_content).unwrap();

        assert_eq!(imported.transactions.len(), 1);
        assert_eq!(imported.transactions[0].description, "Metro recharge");
    }

    #[test]
    fn test_yaml_import_rejects_garbage() {
        let err = import_from_yaml(": not yaml [").unwrap_err();
        assert!(matches!(err, UpiqError::Transport(_)));
    }
}
