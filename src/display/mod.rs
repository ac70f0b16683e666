//! Display formatting for terminal output

pub mod category;
pub mod report;
pub mod transaction;

pub use category::{
    display_for, format_category_details, format_category_table, resolve_display, CategoryDisplay,
    PaletteColor, CATEGORY_COLORS, CATEGORY_ICONS,
};
pub use report::{format_bar, format_percentage};
pub use transaction::{format_import_preview, format_transaction_register};
