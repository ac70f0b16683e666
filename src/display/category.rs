//! Category display resolution and formatting
//!
//! Every category gets a deterministic color and icon derived from its
//! name, so the same name always renders the same way without storing
//! anything. Users may pin an explicit color or icon on the category;
//! unknown values fall back to the hash assignment.

use tabled::settings::{object::Columns, Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Category;

/// A palette entry: display name, hex value, and style classes used by
/// web frontends consuming exported data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub name: &'static str,
    pub value: &'static str,
    pub bg: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

/// Fixed 10-color palette
pub static CATEGORY_COLORS: [PaletteColor; 10] = [
    PaletteColor {
        name: "Blue",
        value: "#3b82f6",
        bg: "bg-blue-100",
        text: "text-blue-800",
        border: "border-blue-200",
    },
    PaletteColor {
        name: "Red",
        value: "#ef4444",
        bg: "bg-red-100",
        text: "text-red-800",
        border: "border-red-200",
    },
    PaletteColor {
        name: "Green",
        value: "#10b981",
        bg: "bg-green-100",
        text: "text-green-800",
        border: "border-green-200",
    },
    PaletteColor {
        name: "Yellow",
        value: "#f59e0b",
        bg: "bg-yellow-100",
        text: "text-yellow-800",
        border: "border-yellow-200",
    },
    PaletteColor {
        name: "Purple",
        value: "#8b5cf6",
        bg: "bg-purple-100",
        text: "text-purple-800",
        border: "border-purple-200",
    },
    PaletteColor {
        name: "Pink",
        value: "#ec4899",
        bg: "bg-pink-100",
        text: "text-pink-800",
        border: "border-pink-200",
    },
    PaletteColor {
        name: "Cyan",
        value: "#06b6d4",
        bg: "bg-cyan-100",
        text: "text-cyan-800",
        border: "border-cyan-200",
    },
    PaletteColor {
        name: "Indigo",
        value: "#6366f1",
        bg: "bg-indigo-100",
        text: "text-indigo-800",
        border: "border-indigo-200",
    },
    PaletteColor {
        name: "Orange",
        value: "#f97316",
        bg: "bg-orange-100",
        text: "text-orange-800",
        border: "border-orange-200",
    },
    PaletteColor {
        name: "Teal",
        value: "#14b8a6",
        bg: "bg-teal-100",
        text: "text-teal-800",
        border: "border-teal-200",
    },
];

/// Fixed 30-icon set
pub static CATEGORY_ICONS: [&str; 30] = [
    "💰", "💸", "🍔", "🚗", "🏠", "👕", "💊", "🎓", "🎮", "📱", "✈️", "🍕", "☕", "🎬", "🏋️",
    "💼", "🎁", "💳", "📚", "🎨", "🏥", "🎵", "🌮", "🍺", "🚌", "🏖️", "🛒", "💻", "📺", "🎯",
];

/// Derived display attributes for a category name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDisplay {
    pub icon: &'static str,
    pub color: &'static PaletteColor,
}

/// Sum of UTF-16 code units, the same hash web frontends compute with
/// `charCodeAt`, so both sides agree on colors for unannotated names
fn name_hash(name: &str) -> u64 {
    name.encode_utf16().map(u64::from).sum()
}

/// Resolve the display color and icon for a category name
///
/// An explicit color is honored only when it matches a palette entry by
/// hex value; an explicit icon only when it is in the icon set. Anything
/// else falls back to the hash assignment. Empty names resolve to the
/// first palette and icon entries.
pub fn resolve_display(
    name: &str,
    explicit_color: Option<&str>,
    explicit_icon: Option<&str>,
) -> CategoryDisplay {
    let hash = name_hash(name);

    let color = explicit_color
        .and_then(|value| CATEGORY_COLORS.iter().find(|c| c.value == value))
        .unwrap_or(&CATEGORY_COLORS[hash as usize % CATEGORY_COLORS.len()]);

    let icon = explicit_icon
        .and_then(|value| CATEGORY_ICONS.iter().find(|i| **i == value).copied())
        .unwrap_or(CATEGORY_ICONS[hash as usize % CATEGORY_ICONS.len()]);

    CategoryDisplay { icon, color }
}

/// Resolve display attributes for a stored category
pub fn display_for(category: &Category) -> CategoryDisplay {
    resolve_display(
        &category.name,
        category.color.as_deref(),
        category.icon.as_deref(),
    )
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "ID")]
    id: String,
}

/// Format categories as a table
pub fn format_category_table(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'upiq init' to create default categories.".to_string();
    }

    let rows: Vec<CategoryRow> = categories
        .iter()
        .map(|c| {
            let display = display_for(c);
            CategoryRow {
                name: format!("{} {}", display.icon, c.name),
                kind: c.kind.to_string(),
                color: display.color.name.to_string(),
                description: c.description.clone().unwrap_or_default(),
                id: c.id.to_string(),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Format category details
pub fn format_category_details(category: &Category) -> String {
    let display = display_for(category);
    let mut output = String::new();

    output.push_str(&format!("Category: {} {}\n", display.icon, category.name));
    output.push_str(&format!("  ID:      {}\n", category.id));
    output.push_str(&format!("  Type:    {}\n", category.kind));
    output.push_str(&format!(
        "  Color:   {} ({})\n",
        display.color.name, display.color.value
    ));

    if let Some(description) = &category.description {
        output.push_str(&format!("  Notes:   {}\n", description));
    }

    output.push_str(&format!(
        "  Created: {}\n",
        category.created_at.format("%Y-%m-%d %H:%M")
    ));

    output
}

/// Right-align the last column of a table (amount columns)
pub(crate) fn align_last_column_right(table: &mut Table) {
    table.with(Modify::new(Columns::last()).with(Alignment::right()));
}
