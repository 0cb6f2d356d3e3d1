use anyhow::Result;
use clap::{Parser, Subcommand};

use spendview::cli::{handle_report_command, ReportCommands};
use spendview::config::{paths::SpendviewPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "spendview",
    version,
    about = "Analyze personal expense CSV exports from the command line",
    long_about = "spendview ingests the CSV export of an expense-tracking app and \
                  computes summary views: overview totals with savings rate, a \
                  category breakdown, a month-by-month trend, and per-group spending \
                  based on # markers in transaction notes."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Report(ReportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SpendviewPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Report(cmd) => {
            handle_report_command(&settings, cmd)?;
        }
        Commands::Config => {
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Currency symbol:  {}", settings.currency_symbol);
            println!("Top categories:   {}", settings.top_categories);
        }
    }

    Ok(())
}
