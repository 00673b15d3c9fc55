use std::path::PathBuf;

/// An error exporting measurement runs to CSV.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Path not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("No JSON files found under {}", .0.display())]
    NoJsonFiles(PathBuf),
    #[error("Failed to walk input directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Failed to load measurement run {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: pod_spread_run_model::LoadError,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
