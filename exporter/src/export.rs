use std::path::{Path, PathBuf};

use pod_spread_run_model::{load_measurement_run_from_file, NormalizedRun};

use crate::csv_writer::{write_table, TableOutcome};
use crate::discover::find_json_files;
use crate::error::ExportError;
use crate::rows::{DeploymentRow, SummaryRow};

/// Base name used when the input path has no final component.
pub const DEFAULT_BASE_NAME: &str = "measurements";

/// Which tables to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tables {
    pub summary: bool,
    pub deployments: bool,
}

impl Tables {
    /// Resolve the `--summary-only` and `--deployments-only` flags.
    ///
    /// The flags are independent. Without either, both tables are written.
    pub fn from_flags(summary_only: bool, deployments_only: bool) -> Self {
        let both = !summary_only && !deployments_only;
        Self {
            summary: summary_only || both,
            deployments: deployments_only || both,
        }
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::from_flags(false, false)
    }
}

/// Everything needed to run an export, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPlan {
    pub json_files: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub base_name: String,
    pub tables: Tables,
}

impl ExportPlan {
    /// Discover the input files and work out where the output goes.
    ///
    /// Without an explicit `output_dir`, the tables are written next to the input: in the
    /// parent directory of an input file, or inside an input directory.
    pub fn resolve(
        input_path: &Path,
        output_dir: Option<PathBuf>,
        tables: Tables,
    ) -> Result<Self, ExportError> {
        let json_files = find_json_files(input_path)?;
        if json_files.is_empty() {
            return Err(ExportError::NoJsonFiles(input_path.to_path_buf()));
        }

        let is_file = input_path.is_file();
        let output_dir = output_dir.unwrap_or_else(|| default_output_dir(input_path, is_file));

        Ok(Self {
            json_files,
            output_dir,
            base_name: base_name(input_path, is_file),
            tables,
        })
    }

    pub fn summary_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}-summary.csv", self.base_name))
    }

    pub fn deployments_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}-deployments.csv", self.base_name))
    }
}

fn default_output_dir(input_path: &Path, is_file: bool) -> PathBuf {
    if !is_file {
        return input_path.to_path_buf();
    }
    match input_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn base_name(input_path: &Path, is_file: bool) -> String {
    let name = if is_file {
        input_path.file_stem()
    } else {
        input_path.file_name()
    };
    name.map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_NAME.to_string())
}

/// The outcome of each table, `None` where the table was not requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub summary: Option<TableOutcome>,
    pub deployments: Option<TableOutcome>,
}

/// Load every run, in order. The first file that fails to load aborts the export.
pub fn load_runs(json_files: &[PathBuf]) -> Result<Vec<NormalizedRun>, ExportError> {
    json_files
        .iter()
        .map(|path| {
            debug!("Loading measurement run {}", path.display());
            load_measurement_run_from_file(path).map_err(|source| ExportError::Load {
                path: path.clone(),
                source,
            })
        })
        .collect()
}

/// Write one summary row per run to `output_file`.
pub fn export_summary(
    runs: &[NormalizedRun],
    output_file: &Path,
) -> Result<TableOutcome, ExportError> {
    let rows = runs.iter().map(SummaryRow::from_run).collect::<Vec<_>>();

    let outcome = write_table(output_file, &rows)?;
    match &outcome {
        TableOutcome::Written { path, rows } => {
            info!("Wrote {rows} summary rows to {}", path.display())
        }
        TableOutcome::Empty => warn!("No data to write to summary CSV"),
    }
    Ok(outcome)
}

/// Write one row per deployment per snapshot of every run to `output_file`.
pub fn export_deployments(
    runs: &[NormalizedRun],
    output_file: &Path,
) -> Result<TableOutcome, ExportError> {
    let rows = runs
        .iter()
        .flat_map(DeploymentRow::from_run)
        .collect::<Vec<_>>();

    let outcome = write_table(output_file, &rows)?;
    match &outcome {
        TableOutcome::Written { path, rows } => {
            info!("Wrote {rows} deployment rows to {}", path.display())
        }
        TableOutcome::Empty => warn!("No data to write to deployments CSV"),
    }
    Ok(outcome)
}

/// Run an export plan, creating the output directory if needed.
pub fn run_export(plan: &ExportPlan) -> Result<ExportReport, ExportError> {
    info!("Found {} JSON file(s)", plan.json_files.len());

    let runs = load_runs(&plan.json_files)?;
    std::fs::create_dir_all(&plan.output_dir)?;

    let mut report = ExportReport::default();
    if plan.tables.summary {
        report.summary = Some(export_summary(&runs, &plan.summary_path())?);
    }
    if plan.tables.deployments {
        report.deployments = Some(export_deployments(&runs, &plan.deployments_path())?);
    }

    Ok(report)
}
