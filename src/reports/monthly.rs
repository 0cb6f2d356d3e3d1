//! Monthly trend report
//!
//! Income, expenses and net per calendar month, in ascending month order.
//! Months with no records are absent rather than zero-filled.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::display;
use crate::error::{SpendviewError, SpendviewResult};
use crate::models::{ExpenseRecord, Money, Month};

/// Aggregates for one calendar month
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyRow {
    /// The calendar month
    pub month: Month,
    /// Income total for the month
    pub income: Money,
    /// Expense total for the month, as a positive magnitude
    pub expense: Money,
    /// Income minus expenses
    pub net: Money,
}

/// Month-by-month trend over one record set
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyTrendReport {
    /// Rows in strictly ascending month order, no duplicates
    pub rows: Vec<MonthlyRow>,
}

impl MonthlyTrendReport {
    /// Compute the trend
    ///
    /// Row order does not depend on the input order of records.
    pub fn generate(records: &[ExpenseRecord]) -> Self {
        let mut buckets: BTreeMap<Month, (Money, Money)> = BTreeMap::new();

        for record in records {
            let entry = buckets
                .entry(record.month())
                .or_insert((Money::zero(), Money::zero()));
            if record.is_income() {
                entry.0 += record.amount;
            } else if record.is_expense() {
                entry.1 += record.amount.abs();
            }
        }

        let rows = buckets
            .into_iter()
            .map(|(month, (income, expense))| MonthlyRow {
                month,
                income,
                expense,
                net: income - expense,
            })
            .collect();

        Self { rows }
    }

    /// Format the report for terminal display
    ///
    /// Each row carries a spending bar scaled against the highest-spending
    /// month, which makes outlier months easy to spot.
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{:<9} {:>12} {:>12} {:>12}  {}\n",
            "Month", "Income", "Expenses", "Net", "Spending"
        ));
        output.push_str(&display::separator(72));
        output.push('\n');

        let max_expense = self
            .rows
            .iter()
            .map(|r| r.expense.cents())
            .max()
            .unwrap_or(0) as f64;

        for row in &self.rows {
            output.push_str(&format!(
                "{:<9} {:>12} {:>12} {:>12}  {}\n",
                row.month.to_string(),
                row.income.to_string(),
                row.expense.to_string(),
                row.net.to_string(),
                display::format_bar(row.expense.cents() as f64, max_expense, 20)
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SpendviewResult<()> {
        writeln!(writer, "Month,Income,Expenses,Net")
            .map_err(|e| SpendviewError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{:.2},{:.2},{:.2}",
                row.month,
                row.income.cents() as f64 / 100.0,
                row.expense.cents() as f64 / 100.0,
                row.net.cents() as f64 / 100.0
            )
            .map_err(|e| SpendviewError::Export(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(date: (i32, u32, u32), cents: i64) -> ExpenseRecord {
        ExpenseRecord::new(
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            "Food",
            "test",
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_months_ascending_no_duplicates() {
        // Deliberately out of order
        let records = vec![
            record((2024, 3, 10), -1000),
            record((2024, 1, 5), -2000),
            record((2024, 3, 20), -500),
            record((2024, 2, 1), 100_000),
        ];

        let report = MonthlyTrendReport::generate(&records);
        let months: Vec<String> = report.rows.iter().map(|r| r.month.to_string()).collect();
        assert_eq!(months, vec!["2024-01", "2024-02", "2024-03"]);

        let march = &report.rows[2];
        assert_eq!(march.expense.cents(), 1500);
        assert!(march.income.is_zero());
        assert_eq!(march.net.cents(), -1500);
    }

    #[test]
    fn test_income_and_expense_split_within_month() {
        let records = vec![
            record((2024, 3, 1), 250_000),
            record((2024, 3, 10), -40_000),
            record((2024, 3, 15), -10_000),
        ];

        let report = MonthlyTrendReport::generate(&records);
        assert_eq!(report.rows.len(), 1);
        let row = &report.rows[0];
        assert_eq!(row.income.cents(), 250_000);
        assert_eq!(row.expense.cents(), 50_000);
        assert_eq!(row.net.cents(), 200_000);
    }

    #[test]
    fn test_order_independence() {
        let mut records = vec![
            record((2024, 1, 5), -2000),
            record((2024, 2, 1), 100_000),
            record((2024, 3, 10), -1000),
        ];

        let forward = MonthlyTrendReport::generate(&records);
        records.reverse();
        let backward = MonthlyTrendReport::generate(&records);

        for (a, b) in forward.rows.iter().zip(backward.rows.iter()) {
            assert_eq!(a.month, b.month);
            assert_eq!(a.net, b.net);
        }
    }

    #[test]
    fn test_empty_input() {
        let report = MonthlyTrendReport::generate(&[]);
        assert!(report.rows.is_empty());
    }

    #[test]
    fn test_export_csv() {
        let records = vec![record((2024, 3, 1), 100_000), record((2024, 3, 2), -2500)];
        let report = MonthlyTrendReport::generate(&records);

        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        assert!(csv.starts_with("Month,Income,Expenses,Net\n"));
        assert!(csv.contains("2024-03,1000.00,25.00,975.00"));
    }
}
