//! Storage initialization
//!
//! Handles first-run setup and default category creation

use crate::config::paths::UpiqPaths;
use crate::error::UpiqError;
use crate::models::{Category, CategoryKind};

use super::categories::CategoryData;
use super::file_io::write_json_atomic;

/// Default categories created on first run, matching the set users expect
/// when no custom categories exist yet
const DEFAULT_EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Groceries",
    "Shopping",
    "Transport",
    "Bills & Utilities",
    "Entertainment",
    "Health",
    "Other",
];

const DEFAULT_INCOME_CATEGORIES: &[&str] = &["Salary", "Investment"];

/// Initialize storage for a fresh installation
///
/// Creates directories and seeds default categories if categories.json
/// doesn't exist yet.
pub fn initialize_storage(paths: &UpiqPaths) -> Result<(), UpiqError> {
    paths.ensure_directories()?;

    if !paths.categories_file().exists() {
        create_default_categories(paths)?;
    }

    Ok(())
}

/// Create the default category set
fn create_default_categories(paths: &UpiqPaths) -> Result<(), UpiqError> {
    let mut categories = Vec::new();

    for name in DEFAULT_EXPENSE_CATEGORIES {
        categories.push(Category::new(*name, CategoryKind::Expense));
    }

    for name in DEFAULT_INCOME_CATEGORIES {
        categories.push(Category::new(*name, CategoryKind::Income));
    }

    let data = CategoryData { categories };
    write_json_atomic(paths.categories_file(), &data)?;

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &UpiqPaths) -> bool {
    !paths.categories_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = UpiqPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));

        initialize_storage(&paths).unwrap();

        assert!(!needs_initialization(&paths));
        assert!(paths.categories_file().exists());
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_default_categories_created() {
        let temp_dir = TempDir::new().unwrap();
        let paths = UpiqPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        let content = std::fs::read_to_string(paths.categories_file()).unwrap();
        let data: CategoryData = serde_json::from_str(&content).unwrap();

        assert_eq!(data.categories.len(), 10);

        let names: Vec<_> = data.categories.iter().map(|c| c.name.as_str()).collect();
        assert!(names.contains(&"Food"));
        assert!(names.contains(&"Salary"));

        let salary = data
            .categories
            .iter()
            .find(|c| c.name == "Salary")
            .unwrap();
        assert_eq!(salary.kind, CategoryKind::Income);
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = UpiqPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        let custom_data = CategoryData {
            categories: vec![Category::new("Custom", CategoryKind::Expense)],
        };
        write_json_atomic(paths.categories_file(), &custom_data).unwrap();

        initialize_storage(&paths).unwrap();

        let content = std::fs::read_to_string(paths.categories_file()).unwrap();
        let data: CategoryData = serde_json::from_str(&content).unwrap();

        assert_eq!(data.categories.len(), 1);
        assert_eq!(data.categories[0].name, "Custom");
    }
}
