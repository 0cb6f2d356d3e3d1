//! CSV ingestion
//!
//! Turns the raw CSV export into validated [`ExpenseRecord`]s. Header
//! validation is fatal for the whole upload (a required column is missing);
//! row validation is recoverable: a bad row is skipped and recorded as a
//! [`MalformedRow`] diagnostic so the caller can surface the skip count.
//!
//! Required columns: `date`, `category`, `description`, `amount`. Optional:
//! `sub_category`. Header names are matched case-insensitively with
//! surrounding whitespace ignored; extra columns are ignored.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use serde::Serialize;

use crate::error::{SpendviewError, SpendviewResult};
use crate::models::{ExpenseRecord, Money};
use crate::tags;

/// Resolved column positions for one upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Index of the `date` column
    pub date: usize,
    /// Index of the `category` column
    pub category: usize,
    /// Index of the `description` column
    pub description: usize,
    /// Index of the `amount` column
    pub amount: usize,
    /// Index of the optional `sub_category` column
    pub sub_category: Option<usize>,
}

impl ColumnLayout {
    /// Resolve the layout from a header record
    ///
    /// # Errors
    ///
    /// Returns [`SpendviewError::MissingColumn`] when a required header is
    /// absent. No rows are processed in that case.
    pub fn from_headers(headers: &StringRecord) -> SpendviewResult<Self> {
        let mut date = None;
        let mut category = None;
        let mut description = None;
        let mut amount = None;
        let mut sub_category = None;

        for (idx, header) in headers.iter().enumerate() {
            // First matching header wins
            match header.trim().to_lowercase().as_str() {
                "date" => date = date.or(Some(idx)),
                "category" => category = category.or(Some(idx)),
                "description" => description = description.or(Some(idx)),
                "amount" => amount = amount.or(Some(idx)),
                "sub_category" => sub_category = sub_category.or(Some(idx)),
                _ => {}
            }
        }

        Ok(Self {
            date: date.ok_or_else(|| SpendviewError::missing_column("date"))?,
            category: category.ok_or_else(|| SpendviewError::missing_column("category"))?,
            description: description
                .ok_or_else(|| SpendviewError::missing_column("description"))?,
            amount: amount.ok_or_else(|| SpendviewError::missing_column("amount"))?,
            sub_category,
        })
    }
}

/// Diagnostic for one CSV row that could not become a record
///
/// `line` is the 1-indexed line in the CSV file, counting the header as
/// line 1, so it points a user straight at the offending row in an editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedRow {
    /// CSV line number (header = line 1)
    pub line: usize,
    /// What went wrong with this row
    pub message: String,
}

impl fmt::Display for MalformedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Result of ingesting one CSV upload
#[derive(Debug, Clone, Default)]
pub struct ImportOutcome {
    /// Successfully parsed records, in file order
    pub records: Vec<ExpenseRecord>,
    /// Rows skipped with a diagnostic each
    pub skipped: Vec<MalformedRow>,
}

impl ImportOutcome {
    /// Number of rows skipped during ingestion
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Read and validate expense records from CSV text
///
/// A header-only (or entirely empty-bodied) CSV is valid and produces an
/// empty outcome, not an error.
pub fn read_records<R: Read>(reader: R) -> SpendviewResult<ImportOutcome> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let layout = ColumnLayout::from_headers(&headers)?;

    let mut outcome = ImportOutcome::default();

    for (idx, result) in csv_reader.records().enumerate() {
        let line = idx + 2; // 1-indexed + header row
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                // Broken quoting or wrong field count: skip this row only
                outcome.skipped.push(MalformedRow {
                    line,
                    message: format!("unreadable row: {}", e),
                });
                continue;
            }
        };

        match parse_row(&record, &layout) {
            Ok(expense) => outcome.records.push(expense),
            Err(message) => outcome.skipped.push(MalformedRow { line, message }),
        }
    }

    Ok(outcome)
}

/// Read and validate expense records from a CSV file
pub fn read_records_from_path(path: &Path) -> SpendviewResult<ImportOutcome> {
    let file = File::open(path)
        .map_err(|e| SpendviewError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    read_records(file)
}

/// Parse one data row against the resolved layout
fn parse_row(record: &StringRecord, layout: &ColumnLayout) -> Result<ExpenseRecord, String> {
    let date_str = record
        .get(layout.date)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| "missing date field".to_string())?;

    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{}': expected YYYY-MM-DD", date_str))?;

    let category = record
        .get(layout.category)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| "missing category field".to_string())?;

    let amount_str = record
        .get(layout.amount)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| "missing amount field".to_string())?;

    let amount =
        Money::parse(amount_str).map_err(|_| format!("invalid amount '{}'", amount_str))?;

    let description = record
        .get(layout.description)
        .map(str::trim)
        .unwrap_or_default()
        .to_string();

    let sub_category = layout
        .sub_category
        .and_then(|col| record.get(col))
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let mut expense = ExpenseRecord::new(date, category, description, amount);
    if let Some(sub) = sub_category {
        expense = expense.with_sub_category(sub);
    }
    if let Some(group) = tags::extract_group(&expense.description) {
        expense = expense.with_group(group);
    }

    Ok(expense)
}
