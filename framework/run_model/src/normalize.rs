//! Reconcile the historical shapes of a run document into one canonical [NormalizedRun].
//!
//! Every canonical field has a single function below that applies its ordered list of sources.
//! The first present source wins. The run-level timestamp and elapsed time also skip zero and
//! `false`, matching how the benchmark's own tooling reads them.

use crate::cluster::ClusterIdentity;
use crate::document::{ClusterState, Measurement, RunArgs, RunDocument};
use crate::postprocessed::PostprocessedStats;
use crate::scalar::{first_truthy, Scalar};
use serde_json::{Map, Value};

/// A measurement run with every field resolved from whichever schema produced it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedRun {
    pub cluster: ClusterIdentity,
    pub timestamp: Scalar,
    pub elapsed_time: Scalar,
    pub scenario: Scalar,
    pub action: Scalar,
    pub namespaces: Vec<String>,
    pub postprocessed: PostprocessedStats,
    pub measurements: MeasurementSource,
}

/// Where the snapshots of a run came from.
#[derive(Debug, Clone, PartialEq)]
pub enum MeasurementSource {
    /// A non-empty list of snapshots, from `measurements` or `measurements_taken`.
    Series(Vec<Measurement>),
    /// Legacy runs with one snapshot before and one after the action.
    Legacy {
        pre: Option<Measurement>,
        post: Option<Measurement>,
    },
}

impl Default for MeasurementSource {
    fn default() -> Self {
        Self::Legacy {
            pre: None,
            post: None,
        }
    }
}

/// Cluster state and deployment count that represent a whole run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotSummary {
    pub cluster: ClusterState,
    pub deployment_count: usize,
}

impl MeasurementSource {
    /// The snapshots to report deployments from.
    ///
    /// For legacy runs this is only the post-action snapshot.
    pub fn snapshots(&self) -> &[Measurement] {
        match self {
            Self::Series(measurements) => measurements,
            Self::Legacy { post, .. } => post.as_slice(),
        }
    }

    /// Summarise the run from its first snapshot.
    ///
    /// Legacy runs take cluster state from the post-action snapshot, or from the pre-action
    /// snapshot when post has no `cluster` block or an empty one. The deployment count always
    /// comes from post.
    pub fn summary(&self) -> SnapshotSummary {
        match self {
            Self::Series(measurements) => measurements
                .first()
                .map(|first| SnapshotSummary {
                    cluster: first.cluster.clone().unwrap_or_default(),
                    deployment_count: first.deployments.len(),
                })
                .unwrap_or_default(),
            Self::Legacy { pre, post } => {
                let cluster = [post, pre]
                    .into_iter()
                    .flatten()
                    .filter_map(|m| m.cluster.as_ref())
                    .find(|c| !c.is_empty())
                    .cloned()
                    .unwrap_or_default();

                SnapshotSummary {
                    cluster,
                    deployment_count: post.as_ref().map_or(0, |m| m.deployments.len()),
                }
            }
        }
    }
}

impl NormalizedRun {
    /// Resolve every canonical field of a run document.
    pub fn from_document(doc: RunDocument) -> serde_json::Result<Self> {
        Ok(Self {
            cluster: cluster_identity(&doc),
            timestamp: timestamp(&doc),
            elapsed_time: elapsed_time(&doc),
            scenario: doc.args.scenario.clone(),
            action: doc.args.action.clone(),
            namespaces: namespaces(&doc.args),
            postprocessed: PostprocessedStats::from_block(postprocessed_block(&doc))?,
            measurements: measurement_source(doc),
        })
    }

    /// The namespaces joined into a single cell.
    pub fn namespaces_joined(&self) -> String {
        self.namespaces.join(",")
    }
}

/// `args.cluster_context`, as an EKS ARN or a plain name, else the top level `cluster` field.
pub fn cluster_identity(doc: &RunDocument) -> ClusterIdentity {
    match doc.args.cluster_context.as_deref() {
        Some(context) if !context.is_empty() => ClusterIdentity::from_context(context),
        _ => ClusterIdentity::named(doc.cluster.render()),
    }
}

/// `timestamp`, else `start_time`. Zero is treated as missing.
pub fn timestamp(doc: &RunDocument) -> Scalar {
    first_truthy([&doc.timestamp, &doc.start_time])
}

/// `install_time`, else `elapsed_time`. Zero is treated as missing.
pub fn elapsed_time(doc: &RunDocument) -> Scalar {
    first_truthy([&doc.install_time, &doc.elapsed_time])
}

/// `args.namespaces`, else `args.namespace` as a single entry.
pub fn namespaces(args: &RunArgs) -> Vec<String> {
    match (&args.namespaces, &args.namespace) {
        (Some(namespaces), _) if !namespaces.is_empty() => namespaces.clone(),
        (_, Some(namespace)) if !namespace.is_empty() => vec![namespace.clone()],
        _ => Vec::new(),
    }
}

/// `postprocessed`, else `postprocessed_data`, else an empty block.
pub fn postprocessed_block(doc: &RunDocument) -> Map<String, Value> {
    [&doc.postprocessed, &doc.postprocessed_data]
        .into_iter()
        .flatten()
        .find(|block| !block.is_empty())
        .cloned()
        .unwrap_or_default()
}

/// `measurements`, else `measurements_taken`, else the legacy pre/post pair.
pub fn measurement_source(doc: RunDocument) -> MeasurementSource {
    [doc.measurements, doc.measurements_taken]
        .into_iter()
        .flatten()
        .find(|series| !series.is_empty())
        .map(MeasurementSource::Series)
        .unwrap_or(MeasurementSource::Legacy {
            pre: doc.measurements_pre,
            post: doc.measurements_post,
        })
}
