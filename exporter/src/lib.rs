//! Export pod distribution measurement runs to CSV for spreadsheet import.
//!
//! Two tables are produced from a set of run documents: a summary with one row per run, and a
//! deployments table with one row per deployment in every snapshot of every run.

#[macro_use]
extern crate log;

mod csv_writer;
mod discover;
mod error;
mod export;
pub mod rows;

pub use csv_writer::{write_table, CsvTableWriter, TableOutcome};
pub use discover::find_json_files;
pub use error::ExportError;
pub use export::{
    export_deployments, export_summary, load_runs, run_export, ExportPlan, ExportReport, Tables,
    DEFAULT_BASE_NAME,
};
