//! User settings persisted in config.json

use serde::{Deserialize, Serialize};

use crate::config::paths::UpiqPaths;
use crate::error::UpiqError;
use crate::storage::file_io;

fn default_schema_version() -> u32 {
    1
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_payment_method() -> String {
    "UPI".to_string()
}

/// User-tunable settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for future migrations
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Symbol shown when formatting amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// strftime format for dates in listings
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Payment method assigned when a transaction does not specify one
    #[serde(default = "default_payment_method")]
    pub default_payment_method: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency_symbol(),
            date_format: default_date_format(),
            default_payment_method: default_payment_method(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if absent
    pub fn load_or_create(paths: &UpiqPaths) -> Result<Self, UpiqError> {
        let file = paths.settings_file();

        if file.exists() {
            file_io::read_json(&file)
        } else {
            paths.ensure_directories()?;
            let settings = Self::default();
            file_io::write_json_atomic(&file, &settings)?;
            Ok(settings)
        }
    }

    /// Persist settings to disk
    pub fn save(&self, paths: &UpiqPaths) -> Result<(), UpiqError> {
        paths.ensure_directories()?;
        file_io::write_json_atomic(&paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_or_create_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = UpiqPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();

        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.default_payment_method, "UPI");
        assert!(paths.settings_file().exists());
    }

    #[test]
    fn test_load_existing_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = UpiqPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::load_or_create(&paths).unwrap();
        settings.currency_symbol = "Rs".to_string();
        settings.save(&paths).unwrap();

        let reloaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(reloaded.currency_symbol, "Rs");
        assert_eq!(reloaded.schema_version, 1);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = UpiqPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        std::fs::write(paths.settings_file(), r#"{"currency_symbol":"$"}"#).unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.date_format, "%Y-%m-%d");
    }
}
