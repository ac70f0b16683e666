//! Report generation for upiq
//!
//! Reports pull data through the service layer and render to plain
//! terminal text, with CSV export where it makes sense.

pub mod budget_overview;
pub mod dashboard;
pub mod spending;

pub use budget_overview::BudgetOverviewReport;
pub use dashboard::DashboardReport;
pub use spending::SpendingReport;
