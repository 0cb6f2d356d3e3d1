//! Group spending report
//!
//! Summarizes the records clustered under each `# <label>` marker: total
//! spent, member count, date span and the dominant category. Records without
//! a marker do not appear here at all.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::display;
use crate::error::{SpendviewError, SpendviewResult};
use crate::models::{ExpenseRecord, Money};
use crate::tags;

/// Summary for one group label
#[derive(Debug, Clone, Serialize)]
pub struct GroupRow {
    /// The group label, verbatim as tagged
    pub label: String,
    /// Expense total across members, as a positive magnitude
    pub total_spent: Money,
    /// Number of member records, income included
    pub record_count: usize,
    /// Earliest member date
    pub first_date: NaiveDate,
    /// Latest member date
    pub last_date: NaiveDate,
    /// Inclusive day span from first to last member
    pub duration_days: i64,
    /// Category with the highest spend inside the group, if any expense exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_category: Option<String>,
}

/// Per-group summaries over one record set
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    /// Rows sorted by total spent, largest first
    pub rows: Vec<GroupRow>,
}

impl GroupReport {
    /// Compute the group summaries
    ///
    /// Untagged records are ignored; with no tagged records the report is
    /// empty.
    pub fn generate(records: &[ExpenseRecord]) -> Self {
        let mut by_label: BTreeMap<&str, Vec<&ExpenseRecord>> = BTreeMap::new();
        for record in records {
            if let Some(label) = record.group.as_deref() {
                by_label.entry(label).or_default().push(record);
            }
        }

        let mut rows: Vec<GroupRow> = by_label
            .into_iter()
            .map(|(label, members)| Self::summarize(label, &members))
            .collect();

        rows.sort_by(|a, b| b.total_spent.cmp(&a.total_spent));

        Self { rows }
    }

    fn summarize(label: &str, members: &[&ExpenseRecord]) -> GroupRow {
        let total_spent: Money = members
            .iter()
            .filter(|r| r.is_expense())
            .map(|r| r.amount.abs())
            .sum();

        // members is non-empty by construction
        let first_date = members.iter().map(|r| r.date).min().unwrap_or_default();
        let last_date = members.iter().map(|r| r.date).max().unwrap_or_default();
        let duration_days = (last_date - first_date).num_days() + 1;

        let mut by_category: BTreeMap<&str, Money> = BTreeMap::new();
        for record in members.iter().filter(|r| r.is_expense()) {
            *by_category.entry(record.category.as_str()).or_default() += record.amount.abs();
        }
        let top_category = by_category
            .into_iter()
            .max_by_key(|(_, total)| *total)
            .map(|(category, _)| category.to_string());

        GroupRow {
            label: label.to_string(),
            total_spent,
            record_count: members.len(),
            first_date,
            last_date,
            duration_days,
            top_category,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.rows.is_empty() {
            return "No grouped transactions found.\n".to_string();
        }

        let mut output = String::new();

        output.push_str(&format!(
            "{:<20} {:>12} {:>7} {:>7}  {:<23} {}\n",
            "Group", "Spent", "Records", "Days", "Dates", "Top category"
        ));
        output.push_str(&display::separator(90));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<20} {:>12} {:>7} {:>7}  {:<23} {}\n",
                display::truncate(&row.label, 20),
                row.total_spent.to_string(),
                row.record_count,
                row.duration_days,
                format!("{} to {}", row.first_date, row.last_date),
                row.top_category.as_deref().unwrap_or("-")
            ));
        }

        output
    }

    /// List one group's member transactions, in date order
    ///
    /// Descriptions are shown with the group marker stripped since the rows
    /// are already clustered under the label. Returns an error when the label
    /// matches no record.
    pub fn format_members(records: &[ExpenseRecord], label: &str) -> SpendviewResult<String> {
        let mut members: Vec<&ExpenseRecord> = records
            .iter()
            .filter(|r| r.group.as_deref() == Some(label))
            .collect();

        if members.is_empty() {
            return Err(SpendviewError::Validation(format!(
                "No transactions tagged with group '{}'",
                label
            )));
        }

        members.sort_by_key(|r| r.date);

        let mut output = String::new();
        output.push_str(&format!("Group: {}\n", label));
        output.push_str(&display::separator(70));
        output.push('\n');

        for record in &members {
            output.push_str(&format!(
                "{} {:<20} {:>12}  {}\n",
                record.date,
                display::truncate(&record.category, 20),
                record.amount.to_string(),
                tags::strip_group_marker(&record.description)
            ));
        }

        Ok(output)
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SpendviewResult<()> {
        writeln!(
            writer,
            "Group,Spent,Records,First date,Last date,Days,Top category"
        )
        .map_err(|e| SpendviewError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{:.2},{},{},{},{},{}",
                row.label,
                row.total_spent.cents() as f64 / 100.0,
                row.record_count,
                row.first_date,
                row.last_date,
                row.duration_days,
                row.top_category.as_deref().unwrap_or("")
            )
            .map_err(|e| SpendviewError::Export(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        date: (i32, u32, u32),
        category: &str,
        cents: i64,
        group: Option<&str>,
    ) -> ExpenseRecord {
        let mut r = ExpenseRecord::new(
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            category,
            "test",
            Money::from_cents(cents),
        );
        if let Some(g) = group {
            r = r.with_group(g);
        }
        r
    }

    #[test]
    fn test_untagged_records_excluded() {
        let records = vec![
            record((2024, 3, 1), "Food", -1000, Some("Tokyo2024")),
            record((2024, 3, 2), "Food", -2000, None),
        ];

        let report = GroupReport::generate(&records);
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].label, "Tokyo2024");
        assert_eq!(report.rows[0].total_spent.cents(), 1000);
    }

    #[test]
    fn test_date_span_and_counts() {
        let records = vec![
            record((2024, 3, 1), "Transport", -50_000, Some("Tokyo2024")),
            record((2024, 3, 10), "Food", -3000, Some("Tokyo2024")),
            // A refund inside the group: counted as a member, not as spend
            record((2024, 3, 5), "Transport", 10_000, Some("Tokyo2024")),
        ];

        let report = GroupReport::generate(&records);
        let row = &report.rows[0];
        assert_eq!(row.total_spent.cents(), 53_000);
        assert_eq!(row.record_count, 3);
        assert_eq!(row.first_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(row.last_date, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert_eq!(row.duration_days, 10);
        assert_eq!(row.top_category.as_deref(), Some("Transport"));
    }

    #[test]
    fn test_single_day_group_spans_one_day() {
        let records = vec![record((2024, 3, 1), "Food", -1000, Some("Brunch"))];
        let report = GroupReport::generate(&records);
        assert_eq!(report.rows[0].duration_days, 1);
    }

    #[test]
    fn test_rows_sorted_by_spend_descending() {
        let records = vec![
            record((2024, 3, 1), "Food", -1000, Some("Small")),
            record((2024, 4, 1), "Food", -9000, Some("Big")),
        ];

        let report = GroupReport::generate(&records);
        assert_eq!(report.rows[0].label, "Big");
        assert_eq!(report.rows[1].label, "Small");
    }

    #[test]
    fn test_income_only_group_has_no_top_category() {
        let records = vec![record((2024, 3, 1), "Refunds", 5000, Some("Returns"))];
        let report = GroupReport::generate(&records);
        let row = &report.rows[0];
        assert!(row.total_spent.is_zero());
        assert!(row.top_category.is_none());
    }

    #[test]
    fn test_no_groups() {
        let records = vec![record((2024, 3, 1), "Food", -1000, None)];
        let report = GroupReport::generate(&records);
        assert!(report.rows.is_empty());
        assert!(report.format_terminal().contains("No grouped transactions"));
    }

    #[test]
    fn test_format_members_strips_marker() {
        let mut first = record((2024, 3, 2), "Food", -1000, Some("Tokyo2024"));
        first.description = "Lunch # Tokyo2024".to_string();
        let mut second = record((2024, 3, 1), "Transport", -5000, Some("Tokyo2024"));
        second.description = "Shinkansen # Tokyo2024".to_string();

        let text = GroupReport::format_members(&[first, second], "Tokyo2024").unwrap();
        let lines: Vec<&str> = text.lines().collect();

        // Date order, not input order
        assert!(lines[2].contains("2024-03-01"));
        assert!(lines[2].contains("Shinkansen"));
        assert!(lines[3].contains("Lunch"));
        // Marker removed from the listed note
        assert!(!lines[3].contains('#'));
    }

    #[test]
    fn test_format_members_unknown_label() {
        let records = vec![record((2024, 3, 1), "Food", -1000, Some("Tokyo2024"))];
        let err = GroupReport::format_members(&records, "Osaka").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_export_csv() {
        let records = vec![record((2024, 3, 1), "Food", -1250, Some("Tokyo2024"))];
        let report = GroupReport::generate(&records);

        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        assert!(csv.contains("Tokyo2024,12.50,1,2024-03-01,2024-03-01,1,Food"));
    }
}
