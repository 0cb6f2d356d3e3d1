//! Core data models for spendview
//!
//! This module contains the data structures that represent the analysis
//! domain: monetary amounts, calendar months, and expense records.

pub mod money;
pub mod month;
pub mod record;

pub use money::Money;
pub use month::Month;
pub use record::ExpenseRecord;
