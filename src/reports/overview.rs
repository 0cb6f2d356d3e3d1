//! Overview report
//!
//! The headline numbers for one record set: total income, total spending,
//! net, and the savings rate.

use serde::Serialize;

use crate::display;
use crate::models::{ExpenseRecord, Money};

/// Headline summary over one record set
#[derive(Debug, Clone, Serialize)]
pub struct OverviewReport {
    /// Sum of all income records (positive amounts)
    pub total_income: Money,
    /// Sum of all expense records, as a positive magnitude
    pub total_expense: Money,
    /// Income minus expenses (signed)
    pub net: Money,
    /// Net as a percentage of income; 0.0 when there is no income
    pub savings_rate: f64,
    /// Total number of records
    pub record_count: usize,
    /// Number of distinct top-level categories
    pub category_count: usize,
}

impl OverviewReport {
    /// Compute the overview
    pub fn generate(records: &[ExpenseRecord]) -> Self {
        let total_income: Money = records
            .iter()
            .filter(|r| r.is_income())
            .map(|r| r.amount)
            .sum();

        let expense_signed: Money = records
            .iter()
            .filter(|r| r.is_expense())
            .map(|r| r.amount)
            .sum();
        let total_expense = expense_signed.abs();

        let net = total_income - total_expense;

        let savings_rate = if total_income.is_zero() {
            0.0
        } else {
            net.cents() as f64 / total_income.cents() as f64 * 100.0
        };

        let mut categories: Vec<&str> = records.iter().map(|r| r.category.as_str()).collect();
        categories.sort_unstable();
        categories.dedup();

        Self {
            total_income,
            total_expense,
            net,
            savings_rate,
            record_count: records.len(),
            category_count: categories.len(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Overview\n");
        output.push_str(&display::separator(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>14}\n",
            "Total income",
            self.total_income.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "{:<16} {:>14}\n",
            "Total expenses",
            self.total_expense.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "{:<16} {:>14}\n",
            "Net",
            self.net.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "{:<16} {:>14}\n",
            "Savings rate",
            display::format_percentage(self.savings_rate)
        ));
        output.push_str(&display::separator(40));
        output.push('\n');
        output.push_str(&format!(
            "{} records across {} categories\n",
            self.record_count, self.category_count
        ));

        output
    }
}
