//! Dashboard export
//!
//! Bundles every summary view plus ingestion diagnostics into one JSON
//! document, the handoff format for any presentation front end.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{SpendviewError, SpendviewResult};
use crate::ingest::{ImportOutcome, MalformedRow};

use super::category::CategoryReport;
use super::groups::GroupReport;
use super::monthly::MonthlyTrendReport;
use super::overview::OverviewReport;

/// Complete analysis snapshot for one ingested record set
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    /// Version of the tool that produced the export
    pub app_version: String,
    /// When the export was produced
    pub exported_at: DateTime<Utc>,
    /// Number of records behind the summaries
    pub record_count: usize,
    /// Rows skipped during ingestion, with diagnostics
    pub skipped_rows: Vec<MalformedRow>,
    /// Headline numbers
    pub overview: OverviewReport,
    /// Category breakdown
    pub categories: CategoryReport,
    /// Month-by-month trend
    pub monthly: MonthlyTrendReport,
    /// Group summaries
    pub groups: GroupReport,
}

impl Dashboard {
    /// Build the full snapshot from one import
    pub fn generate(outcome: &ImportOutcome) -> Self {
        let records = &outcome.records;

        Self {
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            record_count: records.len(),
            skipped_rows: outcome.skipped.clone(),
            overview: OverviewReport::generate(records),
            categories: CategoryReport::generate(records),
            monthly: MonthlyTrendReport::generate(records),
            groups: GroupReport::generate(records),
        }
    }

    /// Write the snapshot as pretty-printed JSON
    pub fn export_json<W: Write>(&self, writer: &mut W) -> SpendviewResult<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer).map_err(|e| SpendviewError::Export(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest;

    fn sample_outcome() -> ImportOutcome {
        let csv_data = "date,category,description,amount\n\
                        2024-03-01,Salary,March pay,2500.00\n\
                        2024-03-10,Food,Lunch # Tokyo2024,-12.50\n\
                        2024-03-11,Food,Bad row,abc";
        ingest::read_records(csv_data.as_bytes()).unwrap()
    }

    #[test]
    fn test_generate_bundles_all_views() {
        let dashboard = Dashboard::generate(&sample_outcome());

        assert_eq!(dashboard.record_count, 2);
        assert_eq!(dashboard.skipped_rows.len(), 1);
        assert_eq!(dashboard.overview.total_income.cents(), 250_000);
        assert_eq!(dashboard.categories.rows.len(), 2);
        assert_eq!(dashboard.monthly.rows.len(), 1);
        assert_eq!(dashboard.groups.rows.len(), 1);
        assert_eq!(dashboard.groups.rows[0].label, "Tokyo2024");
        assert_eq!(dashboard.app_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_export_json_is_valid() {
        let dashboard = Dashboard::generate(&sample_outcome());

        let mut buf = Vec::new();
        dashboard.export_json(&mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["record_count"], 2);
        assert_eq!(value["groups"]["rows"][0]["label"], "Tokyo2024");
        assert_eq!(value["skipped_rows"][0]["line"], 4);
        assert!(value["exported_at"].is_string());
    }
}
