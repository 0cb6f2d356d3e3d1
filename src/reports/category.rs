//! Category breakdown report
//!
//! Groups records by (category, optional sub-category), summing signed
//! amounts and counting records. Totals stay signed so that the sum of every
//! row equals the overall net.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::error::{SpendviewError, SpendviewResult};
use crate::models::{ExpenseRecord, Money};

/// One (category, sub-category) row of the breakdown
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRow {
    /// Top-level category
    pub category: String,
    /// Optional second-level category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    /// Signed total over all member records
    pub total: Money,
    /// Number of member records
    pub count: usize,
}

/// Category breakdown over one record set
#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    /// Rows sorted by (category, sub-category)
    pub rows: Vec<CategoryRow>,
    /// Sum of all row totals (equals the overall net)
    pub total: Money,
}

impl CategoryReport {
    /// Compute the breakdown
    ///
    /// Empty input yields an empty report.
    pub fn generate(records: &[ExpenseRecord]) -> Self {
        let mut buckets: BTreeMap<(String, Option<String>), (Money, usize)> = BTreeMap::new();

        for record in records {
            let key = (record.category.clone(), record.sub_category.clone());
            let entry = buckets.entry(key).or_insert((Money::zero(), 0));
            entry.0 += record.amount;
            entry.1 += 1;
        }

        let rows: Vec<CategoryRow> = buckets
            .into_iter()
            .map(|((category, sub_category), (total, count))| CategoryRow {
                category,
                sub_category,
                total,
                count,
            })
            .collect();

        let total = rows.iter().map(|r| r.total).sum();

        Self { rows, total }
    }

    /// Expense categories ranked by magnitude spent, largest first
    ///
    /// Sub-categories are rolled up into their parent category; income-only
    /// categories are excluded.
    pub fn top_expense_categories(&self, limit: usize) -> Vec<(String, Money)> {
        let mut by_category: BTreeMap<&str, Money> = BTreeMap::new();
        for row in &self.rows {
            if row.total.is_expense() {
                *by_category.entry(row.category.as_str()).or_default() += row.total;
            }
        }

        let mut ranked: Vec<(String, Money)> = by_category
            .into_iter()
            .map(|(category, total)| (category.to_string(), total.abs()))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{:<25} {:<20} {:>12} {:>8}\n",
            "Category", "Sub-category", "Total", "Count"
        ));
        output.push_str(&crate::display::separator(70));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<25} {:<20} {:>12} {:>8}\n",
                crate::display::truncate(&row.category, 25),
                crate::display::truncate(row.sub_category.as_deref().unwrap_or("-"), 20),
                row.total.to_string(),
                row.count
            ));
        }

        output.push_str(&crate::display::separator(70));
        output.push('\n');
        output.push_str(&format!(
            "{:<46} {:>12} {:>8}\n",
            "NET TOTAL",
            self.total.to_string(),
            self.rows.iter().map(|r| r.count).sum::<usize>()
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SpendviewResult<()> {
        writeln!(writer, "Category,Sub-category,Total,Count")
            .map_err(|e| SpendviewError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{},{:.2},{}",
                row.category,
                row.sub_category.as_deref().unwrap_or(""),
                row.total.cents() as f64 / 100.0,
                row.count
            )
            .map_err(|e| SpendviewError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "TOTAL,,{:.2},{}",
            self.total.cents() as f64 / 100.0,
            self.rows.iter().map(|r| r.count).sum::<usize>()
        )
        .map_err(|e| SpendviewError::Export(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(category: &str, sub: Option<&str>, cents: i64) -> ExpenseRecord {
        let mut r = ExpenseRecord::new(
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            category,
            "test",
            Money::from_cents(cents),
        );
        if let Some(sub) = sub {
            r = r.with_sub_category(sub);
        }
        r
    }

    #[test]
    fn test_generate_groups_by_category_and_sub() {
        let records = vec![
            record("Food", Some("Restaurants"), -1200),
            record("Food", Some("Restaurants"), -800),
            record("Food", Some("Groceries"), -4000),
            record("Food", None, -100),
            record("Salary", None, 250_000),
        ];

        let report = CategoryReport::generate(&records);
        assert_eq!(report.rows.len(), 4);

        // BTreeMap ordering: None sorts before Some
        assert_eq!(report.rows[0].category, "Food");
        assert!(report.rows[0].sub_category.is_none());

        let restaurants = report
            .rows
            .iter()
            .find(|r| r.sub_category.as_deref() == Some("Restaurants"))
            .unwrap();
        assert_eq!(restaurants.total.cents(), -2000);
        assert_eq!(restaurants.count, 2);
    }

    #[test]
    fn test_row_totals_sum_to_net() {
        let records = vec![
            record("Food", None, -5000),
            record("Transport", None, -1500),
            record("Salary", None, 200_000),
        ];

        let report = CategoryReport::generate(&records);
        let row_sum: Money = report.rows.iter().map(|r| r.total).sum();
        assert_eq!(row_sum, report.total);
        assert_eq!(report.total.cents(), 193_500);
    }

    #[test]
    fn test_empty_input() {
        let report = CategoryReport::generate(&[]);
        assert!(report.rows.is_empty());
        assert!(report.total.is_zero());
    }

    #[test]
    fn test_top_expense_categories() {
        let records = vec![
            record("Food", Some("Restaurants"), -2000),
            record("Food", Some("Groceries"), -3000),
            record("Transport", None, -1000),
            record("Salary", None, 100_000),
        ];

        let report = CategoryReport::generate(&records);
        let top = report.top_expense_categories(5);

        // Sub-categories roll up; income categories excluded
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].0, "Food");
        assert_eq!(top[0].1.cents(), 5000);
        assert_eq!(top[1].0, "Transport");

        assert_eq!(report.top_expense_categories(1).len(), 1);
    }

    #[test]
    fn test_export_csv() {
        let records = vec![record("Food", Some("Restaurants"), -1250)];
        let report = CategoryReport::generate(&records);

        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        assert!(csv.starts_with("Category,Sub-category,Total,Count\n"));
        assert!(csv.contains("Food,Restaurants,-12.50,1"));
        assert!(csv.contains("TOTAL,,-12.50,1"));
    }
}
