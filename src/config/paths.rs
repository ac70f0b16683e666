//! Path management for upiq
//!
//! All data lives in one base directory, resolved in order:
//!
//! 1. `UPIQ_DATA_DIR` environment variable (if set)
//! 2. The platform config directory via `directories::ProjectDirs`
//!    (Linux: `~/.config/upiq`, macOS: `~/Library/Application Support/upiq`,
//!    Windows: `%APPDATA%\upiq`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::UpiqError;

/// Resolved filesystem locations for upiq data
#[derive(Debug, Clone)]
pub struct UpiqPaths {
    base_dir: PathBuf,
}

impl UpiqPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, UpiqError> {
        let base_dir = if let Ok(custom) = std::env::var("UPIQ_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "upiq").ok_or_else(|| {
                UpiqError::Config("Could not determine a home directory for upiq data".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Use a custom base directory (tests point this at a temp dir)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Base directory for all upiq data
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Data directory holding the JSON stores
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Path to categories.json
    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    /// Path to budgets.json
    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// Create the base and data directories if missing
    pub fn ensure_directories(&self) -> Result<(), UpiqError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| UpiqError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| UpiqError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Whether upiq has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
