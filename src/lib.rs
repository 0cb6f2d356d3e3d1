//! # spendview
//!
//! A command-line analyzer for personal expense CSV exports. It ingests the
//! export from an expense-tracking app, validates each row into typed
//! records, extracts `# <label>` group markers from descriptions, and
//! computes summary views: overview totals, category breakdown, monthly
//! trend, and per-group spending. Every view can be rendered for the
//! terminal or exported (CSV per view, or one JSON dashboard document).
//!
//! ## Sign convention
//!
//! Amounts are signed: positive is income, negative is an expense. Expense
//! totals are reported as positive magnitudes; net keeps its sign.

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ingest;
pub mod models;
pub mod reports;
pub mod tags;

pub use error::{SpendviewError, SpendviewResult};
