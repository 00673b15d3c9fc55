//! Typed view over the measurement run records written by the pod distribution benchmark.
//!
//! The benchmark has changed its output format over time. A run document is first read into
//! [RunDocument], which accepts every known shape, and then resolved into a [NormalizedRun] that
//! consumers can read without caring which shape it came from.

use std::io::Read;
use std::path::Path;

mod cluster;
mod document;
pub mod normalize;
mod postprocessed;
mod scalar;

pub use cluster::{ClusterIdentity, EKS_ARN_PREFIX};
pub use document::{ClusterState, DeploymentObservation, Measurement, RunArgs, RunDocument};
pub use normalize::{MeasurementSource, NormalizedRun, SnapshotSummary};
pub use postprocessed::PostprocessedStats;
pub use scalar::{first_truthy, Scalar};

/// An error loading a run document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serde JSON error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Load a run document from a reader, without resolving it.
pub fn load_run_document<R: Read>(reader: R) -> Result<RunDocument, LoadError> {
    let reader = std::io::BufReader::new(reader);
    let doc: RunDocument = serde_json::from_reader(reader)?;
    Ok(doc)
}

/// Load and resolve a measurement run from a reader.
pub fn load_measurement_run<R: Read>(reader: R) -> Result<NormalizedRun, LoadError> {
    let doc = load_run_document(reader)?;
    Ok(NormalizedRun::from_document(doc)?)
}

/// Load and resolve a measurement run from a JSON file.
///
/// The file is closed before this returns, whether or not it parsed.
pub fn load_measurement_run_from_file<P>(path: P) -> Result<NormalizedRun, LoadError>
where
    P: AsRef<Path>,
{
    let file = std::fs::File::open(path)?;
    load_measurement_run(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_reader() {
        let input = r#"{
            "cluster": "c1",
            "timestamp": "2025-11-18T12:39:35",
            "measurements": [{ "deployments": { "web": { "total_pods": 3 } } }]
        }"#;
        let run = load_measurement_run(input.as_bytes()).unwrap();
        assert_eq!("c1", run.cluster.name);
        assert_eq!(1, run.measurements.snapshots().len());
    }

    #[test]
    fn fail_on_malformed_json() {
        let result = load_measurement_run(r#"{"cluster": "c1""#.as_bytes());
        assert!(matches!(result, Err(LoadError::Serde(_))));
    }

    #[test]
    fn fail_on_non_object_document() {
        let result = load_measurement_run(r#""run""#.as_bytes());
        assert!(matches!(result, Err(LoadError::Serde(_))));
    }

    #[test]
    fn fail_on_missing_file() {
        let result = load_measurement_run_from_file("/does/not/exist.json");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
