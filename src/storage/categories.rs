//! Category repository for JSON storage
//!
//! Manages loading and saving categories to categories.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::UpiqError;
use crate::models::{normalize_name, Category, CategoryId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable category data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CategoryData {
    pub categories: Vec<Category>,
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    categories: RwLock<HashMap<CategoryId, Category>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: RwLock::new(HashMap::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), UpiqError> {
        let file_data: CategoryData = read_json(&self.path)?;

        let mut categories = self
            .categories
            .write()
            .map_err(|e| UpiqError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        categories.clear();
        for category in file_data.categories {
            categories.insert(category.id, category);
        }

        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), UpiqError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| UpiqError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = categories.values().cloned().collect();
        list.sort_by(|a, b| a.normalized_name().cmp(&b.normalized_name()));

        let file_data = CategoryData { categories: list };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, UpiqError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| UpiqError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.get(&id).cloned())
    }

    /// Get all categories, sorted by name
    pub fn get_all(&self) -> Result<Vec<Category>, UpiqError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| UpiqError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = categories.values().cloned().collect();
        list.sort_by(|a, b| a.normalized_name().cmp(&b.normalized_name()));
        Ok(list)
    }

    /// Find a category by name, case-insensitive
    pub fn find_by_name(&self, name: &str) -> Result<Option<Category>, UpiqError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| UpiqError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let wanted = normalize_name(name);
        Ok(categories
            .values()
            .find(|c| c.normalized_name() == wanted)
            .cloned())
    }

    /// Insert or update a category
    pub fn upsert(&self, category: Category) -> Result<(), UpiqError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| UpiqError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        categories.insert(category.id, category);
        Ok(())
    }

    /// Delete a category, returning whether it existed
    pub fn delete(&self, id: CategoryId) -> Result<bool, UpiqError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| UpiqError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(categories.remove(&id).is_some())
    }

    /// Count categories
    pub fn count(&self) -> Result<usize, UpiqError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| UpiqError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(categories.len())
    }
}
