//! Category service
//!
//! Business logic for category management: creation with duplicate checks,
//! lookup by name or id, partial updates, and deletion.

use crate::error::{UpiqError, UpiqResult};
use crate::models::{Category, CategoryId, CategoryKind};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

/// Input for creating a category
#[derive(Debug, Clone)]
pub struct CreateCategoryInput {
    pub name: String,
    pub kind: CategoryKind,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

/// Input for updating a category
///
/// `None` fields are left untouched; a provided but blank description,
/// color, or icon clears the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateCategoryInput {
    pub name: Option<String>,
    pub kind: Option<CategoryKind>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

fn optional_field(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new category
    pub fn create(&self, input: CreateCategoryInput) -> UpiqResult<Category> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(UpiqError::Validation("Category name cannot be empty".into()));
        }

        // Names are unique ignoring case and surrounding whitespace
        if self.storage.categories.find_by_name(name)?.is_some() {
            return Err(UpiqError::category_exists(name));
        }

        let mut category = Category::new(name, input.kind);
        category.description = input.description.and_then(optional_field);
        category.color = input.color.and_then(optional_field);
        category.icon = input.icon.and_then(optional_field);

        category.validate()?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        Ok(category)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> UpiqResult<Option<Category>> {
        self.storage.categories.get(id)
    }

    /// Get a category by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> UpiqResult<Option<Category>> {
        self.storage.categories.find_by_name(name)
    }

    /// Find a category by name or ID string
    pub fn find(&self, identifier: &str) -> UpiqResult<Option<Category>> {
        // Try by name first
        if let Some(category) = self.storage.categories.find_by_name(identifier)? {
            return Ok(Some(category));
        }

        // Try parsing as ID
        if let Ok(id) = identifier.parse::<CategoryId>() {
            return self.storage.categories.get(id);
        }

        Ok(None)
    }

    /// Resolve a category by name or ID string, failing if it does not exist
    pub fn require(&self, identifier: &str) -> UpiqResult<Category> {
        self.find(identifier)?
            .ok_or_else(|| UpiqError::category_not_found(identifier))
    }

    /// List all categories, sorted by name
    pub fn list(&self) -> UpiqResult<Vec<Category>> {
        self.storage.categories.get_all()
    }

    /// List categories of one kind, sorted by name
    pub fn list_by_kind(&self, kind: CategoryKind) -> UpiqResult<Vec<Category>> {
        let mut categories = self.storage.categories.get_all()?;
        categories.retain(|c| c.kind == kind);
        Ok(categories)
    }

    /// Update a category
    pub fn update(&self, id: CategoryId, input: UpdateCategoryInput) -> UpiqResult<Category> {
        let mut category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| UpiqError::category_not_found(id.to_string()))?;

        if let Some(new_name) = input.name {
            let new_name = new_name.trim();
            if new_name.is_empty() {
                return Err(UpiqError::Validation("Category name cannot be empty".into()));
            }

            // Check for duplicate under another id
            if let Some(existing) = self.storage.categories.find_by_name(new_name)? {
                if existing.id != id {
                    return Err(UpiqError::category_exists(new_name));
                }
            }

            category.name = new_name.to_string();
        }

        if let Some(kind) = input.kind {
            category.kind = kind;
        }

        if let Some(description) = input.description {
            category.description = optional_field(description);
        }
        if let Some(color) = input.color {
            category.color = optional_field(color);
        }
        if let Some(icon) = input.icon {
            category.icon = optional_field(icon);
        }

        category.validate()?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        Ok(category)
    }

    /// Delete a category by name or ID string
    pub fn delete(&self, identifier: &str) -> UpiqResult<Category> {
        let category = self.require(identifier)?;

        self.storage.categories.delete(category.id)?;
        self.storage.categories.save()?;

        Ok(category)
    }
}
