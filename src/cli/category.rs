//! Category CLI commands
//!
//! Implements CLI commands for category management.

use clap::Subcommand;

use crate::display::category::{format_category_details, format_category_table};
use crate::error::UpiqResult;
use crate::models::CategoryKind;
use crate::services::{CategoryService, CreateCategoryInput, UpdateCategoryInput};
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List {
        /// Show only one type (income or expense)
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Category type (income or expense)
        #[arg(short, long, default_value = "expense")]
        kind: String,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
        /// Pinned color (palette hex value, e.g., "#3b82f6")
        #[arg(long)]
        color: Option<String>,
        /// Pinned icon (emoji from the icon set)
        #[arg(long)]
        icon: Option<String>,
    },

    /// Show category details
    Show {
        /// Category name or ID
        category: String,
    },

    /// Edit a category
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New type (income or expense)
        #[arg(short, long)]
        kind: Option<String>,
        /// New description (pass an empty string to clear)
        #[arg(short, long)]
        description: Option<String>,
        /// New color (pass an empty string to clear)
        #[arg(long)]
        color: Option<String>,
        /// New icon (pass an empty string to clear)
        #[arg(long)]
        icon: Option<String>,
    },

    /// Delete a category
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> UpiqResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List { kind } => {
            let categories = match kind {
                Some(kind_str) => {
                    let kind: CategoryKind = kind_str.parse()?;
                    service.list_by_kind(kind)?
                }
                None => service.list()?,
            };
            println!("{}", format_category_table(&categories));
        }

        CategoryCommands::Add {
            name,
            kind,
            description,
            color,
            icon,
        } => {
            let kind: CategoryKind = kind.parse()?;

            let category = service.create(CreateCategoryInput {
                name,
                kind,
                description,
                color,
                icon,
            })?;

            println!("Created category: {}", category.name);
            println!("  Type: {}", category.kind);
            println!("  ID:   {}", category.id);
        }

        CategoryCommands::Show { category } => {
            let cat = service.require(&category)?;
            print!("{}", format_category_details(&cat));
        }

        CategoryCommands::Edit {
            category,
            name,
            kind,
            description,
            color,
            icon,
        } => {
            let cat = service.require(&category)?;

            if name.is_none()
                && kind.is_none()
                && description.is_none()
                && color.is_none()
                && icon.is_none()
            {
                println!("No changes specified. Use --name, --kind, --description, --color, or --icon.");
                return Ok(());
            }

            let kind = match kind {
                Some(kind_str) => Some(kind_str.parse::<CategoryKind>()?),
                None => None,
            };

            let updated = service.update(
                cat.id,
                UpdateCategoryInput {
                    name,
                    kind,
                    description,
                    color,
                    icon,
                },
            )?;

            println!("Updated category: {}", updated.name);
        }

        CategoryCommands::Delete { category } => {
            let deleted = service.delete(&category)?;
            println!("Deleted category: {}", deleted.name);
        }
    }

    Ok(())
}
