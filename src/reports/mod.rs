//! Summary views over ingested records
//!
//! Each report follows the same shape: a `generate` constructor that computes
//! the view from a record slice, a `format_terminal` renderer, and where it
//! makes sense a CSV or JSON export. Reports never mutate records; every view
//! is recomputed from the full slice.

pub mod category;
pub mod dashboard;
pub mod groups;
pub mod monthly;
pub mod overview;

pub use category::CategoryReport;
pub use dashboard::Dashboard;
pub use groups::GroupReport;
pub use monthly::MonthlyTrendReport;
pub use overview::OverviewReport;
