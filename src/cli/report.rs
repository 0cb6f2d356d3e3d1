//! CLI commands for analysis reports
//!
//! Each command ingests a CSV export, prints skipped-row diagnostics to
//! stderr, and renders one summary view to stdout or a file.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::Settings;
use crate::error::{SpendviewError, SpendviewResult};
use crate::ingest::{self, ImportOutcome};
use crate::models::{ExpenseRecord, Month};
use crate::reports::{
    CategoryReport, Dashboard, GroupReport, MonthlyTrendReport, OverviewReport,
};

/// Analysis subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show headline totals and the savings rate
    Overview {
        /// Path to the CSV export
        file: PathBuf,

        /// Restrict to one calendar month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Break down totals by category and sub-category
    Categories {
        /// Path to the CSV export
        file: PathBuf,

        /// Restrict to one calendar month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,

        /// Show only the top N spending categories (N defaults to the
        /// configured top_categories setting)
        #[arg(long, num_args = 0..=1, default_missing_value = "0")]
        top: Option<usize>,

        /// Export to CSV file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show income, expenses and net per month
    Monthly {
        /// Path to the CSV export
        file: PathBuf,

        /// Export to CSV file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Summarize transactions grouped by `# <label>` markers
    Groups {
        /// Path to the CSV export
        file: PathBuf,

        /// List the member transactions of one group
        #[arg(long, value_name = "LABEL")]
        show: Option<String>,

        /// Export to CSV file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export every summary view as one JSON document
    Export {
        /// Path to the CSV export
        file: PathBuf,

        /// Write JSON to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle analysis commands
pub fn handle_report_command(settings: &Settings, cmd: ReportCommands) -> SpendviewResult<()> {
    match cmd {
        ReportCommands::Overview { file, month } => handle_overview(settings, &file, month),
        ReportCommands::Categories {
            file,
            month,
            top,
            output,
        } => handle_categories(settings, &file, month, top, output),
        ReportCommands::Monthly { file, output } => handle_monthly(&file, output),
        ReportCommands::Groups { file, show, output } => handle_groups(&file, show, output),
        ReportCommands::Export { file, output } => handle_export(&file, output),
    }
}

/// Ingest a CSV file and report skipped rows on stderr
fn ingest_with_diagnostics(file: &Path) -> SpendviewResult<ImportOutcome> {
    let outcome = ingest::read_records_from_path(file)?;

    if outcome.skipped_count() > 0 {
        eprintln!(
            "warning: skipped {} malformed row(s) in {}:",
            outcome.skipped_count(),
            file.display()
        );
        for row in &outcome.skipped {
            eprintln!("  {}", row);
        }
    }

    Ok(outcome)
}

/// Apply an optional `YYYY-MM` filter to ingested records
fn filter_by_month(
    records: Vec<ExpenseRecord>,
    month: Option<String>,
) -> SpendviewResult<Vec<ExpenseRecord>> {
    let Some(spec) = month else {
        return Ok(records);
    };

    let month = Month::parse(&spec).map_err(|e| {
        SpendviewError::Validation(format!("{}. Use YYYY-MM (e.g., 2024-03)", e))
    })?;

    Ok(records.into_iter().filter(|r| r.month() == month).collect())
}

fn handle_overview(settings: &Settings, file: &Path, month: Option<String>) -> SpendviewResult<()> {
    let outcome = ingest_with_diagnostics(file)?;
    let records = filter_by_month(outcome.records, month)?;
    let report = OverviewReport::generate(&records);
    println!("{}", report.format_terminal(&settings.currency_symbol));
    Ok(())
}

fn handle_categories(
    settings: &Settings,
    file: &Path,
    month: Option<String>,
    top: Option<usize>,
    output: Option<PathBuf>,
) -> SpendviewResult<()> {
    let outcome = ingest_with_diagnostics(file)?;
    let records = filter_by_month(outcome.records, month)?;
    let report = CategoryReport::generate(&records);

    if let Some(path) = output {
        let mut writer = create_output(&path)?;
        report.export_csv(&mut writer)?;
        println!("Category report exported to: {}", path.display());
        return Ok(());
    }

    if let Some(limit) = top {
        let limit = if limit == 0 { settings.top_categories } else { limit };
        println!("Top spending categories");
        for (rank, (category, total)) in report.top_expense_categories(limit).iter().enumerate() {
            println!("{:>3}. {:<25} {:>12}", rank + 1, category, total.to_string());
        }
    } else {
        println!("{}", report.format_terminal());
    }

    Ok(())
}

fn handle_monthly(file: &Path, output: Option<PathBuf>) -> SpendviewResult<()> {
    let outcome = ingest_with_diagnostics(file)?;
    let report = MonthlyTrendReport::generate(&outcome.records);

    if let Some(path) = output {
        let mut writer = create_output(&path)?;
        report.export_csv(&mut writer)?;
        println!("Monthly report exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal());
    }

    Ok(())
}

fn handle_groups(file: &Path, show: Option<String>, output: Option<PathBuf>) -> SpendviewResult<()> {
    let outcome = ingest_with_diagnostics(file)?;

    if let Some(label) = show {
        let listing = GroupReport::format_members(&outcome.records, &label)?;
        println!("{}", listing);
        return Ok(());
    }

    let report = GroupReport::generate(&outcome.records);

    if let Some(path) = output {
        let mut writer = create_output(&path)?;
        report.export_csv(&mut writer)?;
        println!("Group report exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal());
    }

    Ok(())
}

fn handle_export(file: &Path, output: Option<PathBuf>) -> SpendviewResult<()> {
    let outcome = ingest_with_diagnostics(file)?;
    let dashboard = Dashboard::generate(&outcome);

    if let Some(path) = output {
        let mut writer = create_output(&path)?;
        dashboard.export_json(&mut writer)?;
        println!("Dashboard exported to: {}", path.display());
    } else {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        dashboard.export_json(&mut handle)?;
    }

    Ok(())
}

fn create_output(path: &Path) -> SpendviewResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        SpendviewError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
