//! Expense record model
//!
//! One validated row of the uploaded CSV. Records are read-only after
//! ingestion; every summary view is recomputed from the full record slice.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;
use super::month::Month;

/// A single validated expense or income record
///
/// Invariants (enforced at parse time by [`crate::ingest`]):
/// - `category` is non-empty
/// - `amount` follows the sign convention: positive = income, negative = expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Transaction date
    pub date: NaiveDate,

    /// Top-level category assigned by the expense-tracking app
    pub category: String,

    /// Optional second-level category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,

    /// Free-text description / note, possibly containing a `# <label>` marker
    #[serde(default)]
    pub description: String,

    /// Signed amount (positive for income, negative for expense)
    pub amount: Money,

    /// Group label extracted from the description marker, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl ExpenseRecord {
    /// Create a new record with the required fields
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            sub_category: None,
            description: description.into(),
            amount,
            group: None,
        }
    }

    /// Builder pattern: set the sub-category
    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = Some(sub_category.into());
        self
    }

    /// Builder pattern: set the group label
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// The calendar month this record falls in
    pub fn month(&self) -> Month {
        Month::from_date(self.date)
    }

    /// Whether this record is income (amount > 0)
    pub fn is_income(&self) -> bool {
        self.amount.is_income()
    }

    /// Whether this record is an expense (amount < 0)
    pub fn is_expense(&self) -> bool {
        self.amount.is_expense()
    }
}
