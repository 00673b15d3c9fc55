use std::path::PathBuf;

use clap::Parser;

const USAGE_EXAMPLES: &str = "\
Examples:
  # Export a single run
  pod-spread-export output/prod-live-main/prod-live-main-2025-11-18T12:39:35.json

  # Export every run in a directory
  pod-spread-export output/prod-live-main/

  # Export every run under a directory tree
  pod-spread-export output/

  # Write the CSV files somewhere else
  pod-spread-export output/C2/ --output-dir exports/";

/// Export JSON measurement files to CSV for spreadsheet import.
///
/// Writes `<name>-summary.csv` with one row per run and `<name>-deployments.csv` with one row
/// per deployment per snapshot.
#[derive(Parser)]
#[command(about, long_about = None, after_help = USAGE_EXAMPLES)]
pub struct CliArgs {
    /// Path to a JSON file, or a directory to search recursively for JSON files.
    pub input_path: PathBuf,

    /// Output directory for the CSV files. Defaults to the input's directory.
    #[arg(long, env = "POD_SPREAD_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Export only the summary CSV.
    #[arg(long, default_value = "false")]
    pub summary_only: bool,

    /// Export only the deployments CSV.
    #[arg(long, default_value = "false")]
    pub deployments_only: bool,
}
