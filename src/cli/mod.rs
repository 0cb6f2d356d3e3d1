//! Command-line interface

pub mod report;

pub use report::{handle_report_command, ReportCommands};
