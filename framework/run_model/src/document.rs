//! Serde view of a measurement run document, covering every historical shape of the file.
//!
//! Nothing in here applies fallbacks, see [crate::normalize] for that. Fields that the benchmark
//! has written with inconsistent types over time are kept as [Scalar]s.

use crate::scalar::Scalar;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// One measurement run, as written by the pod distribution benchmark.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RunDocument {
    /// The arguments the benchmark was invoked with.
    pub args: RunArgs,
    /// Cluster name, written by newer runs instead of `args.cluster_context`.
    pub cluster: Scalar,
    pub timestamp: Scalar,
    /// Older name for `timestamp`.
    pub start_time: Scalar,
    pub install_time: Scalar,
    pub elapsed_time: Scalar,
    pub postprocessed: Option<Map<String, Value>>,
    /// Older name for `postprocessed`.
    pub postprocessed_data: Option<Map<String, Value>>,
    pub measurements: Option<Vec<Measurement>>,
    pub measurements_taken: Option<Vec<Measurement>>,
    /// Legacy runs took exactly two snapshots, before and after the action.
    pub measurements_pre: Option<Measurement>,
    pub measurements_post: Option<Measurement>,
}

/// The `args` block of a run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RunArgs {
    /// Kube context, an EKS ARN for older runs.
    pub cluster_context: Option<String>,
    pub scenario: Scalar,
    pub action: Scalar,
    pub namespaces: Option<Vec<String>>,
    /// Single namespace, written by runs that predate `namespaces`.
    pub namespace: Option<String>,
}

/// A snapshot of the cluster and its deployments at one point in a run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Measurement {
    pub timestamp: Scalar,
    pub cluster: Option<ClusterState>,
    /// Deployments by name, in the order they appear in the document.
    pub deployments: IndexMap<String, DeploymentObservation>,
}

/// The `cluster` block of a snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterState {
    pub node_count: Scalar,
    pub eligible_node_count: Scalar,
    /// Whether the block had any keys at all, including ones not read here.
    populated: bool,
}

impl ClusterState {
    /// An empty block, `{}`. A block with only unknown keys is not empty.
    pub fn is_empty(&self) -> bool {
        !self.populated
    }
}

impl<'de> Deserialize<'de> for ClusterState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut block = Map::<String, Value>::deserialize(deserializer)?;
        let populated = !block.is_empty();
        let mut take = |key: &str| block.remove(key).map(Scalar::new).unwrap_or_default();

        Ok(Self {
            node_count: take("node_count"),
            eligible_node_count: take("eligible_node_count"),
            populated,
        })
    }
}

/// Pod distribution metrics for one deployment in one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeploymentObservation {
    /// Explicit deployment name, takes priority over the key in the `deployments` mapping.
    pub name: Scalar,
    pub total_pods: Scalar,
    pub nodes_used: Scalar,
    pub max_pods: Scalar,
    pub min_pods: Scalar,
    pub mean_pods: Scalar,
    pub median_pods: Scalar,
    pub node_skew: Scalar,
    pub node_skew_percentage: Scalar,
    pub coefficient_of_variation: Scalar,
    pub gini_coefficient: Scalar,
    pub jain_fairness_index: Scalar,
}

impl DeploymentObservation {
    /// The deployment name, given the key this observation was found under.
    ///
    /// The key is only used when `name` is left out or `null`, an empty name is kept.
    pub fn name_or(&self, key: &str) -> String {
        if !self.name.is_absent_or_null() {
            self.name.render()
        } else {
            key.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deployments_keep_document_order() {
        let measurement: Measurement = serde_json::from_str(
            r#"{"deployments": {"zeta": {}, "alpha": {}, "mid": {}}}"#,
        )
        .unwrap();

        assert_eq!(
            vec!["zeta", "alpha", "mid"],
            measurement.deployments.keys().collect::<Vec<_>>()
        );
    }

    #[test]
    fn explicit_name_wins_over_key() {
        let observation = DeploymentObservation {
            name: json!("web").into(),
            ..Default::default()
        };
        assert_eq!("web", observation.name_or("web-7f9c"));
        assert_eq!("web-7f9c", DeploymentObservation::default().name_or("web-7f9c"));
    }

    #[test]
    fn blank_name_is_kept_and_null_name_uses_key() {
        let observation: DeploymentObservation =
            serde_json::from_value(json!({ "name": "" })).unwrap();
        assert_eq!("", observation.name_or("web"));

        let observation: DeploymentObservation =
            serde_json::from_value(json!({ "name": null })).unwrap();
        assert_eq!("web", observation.name_or("web"));
    }

    #[test]
    fn cluster_block_with_unknown_keys_is_not_empty() {
        let cluster: ClusterState =
            serde_json::from_value(json!({ "nodes": ["ip-10-0-0-1"] })).unwrap();
        assert!(!cluster.is_empty());
        assert!(!cluster.node_count.is_present());

        let cluster: ClusterState = serde_json::from_value(json!({})).unwrap();
        assert!(cluster.is_empty());

        let cluster: ClusterState =
            serde_json::from_value(json!({ "node_count": 4, "eligible_node_count": 3 })).unwrap();
        assert!(!cluster.is_empty());
        assert_eq!("4", cluster.node_count.render());
        assert_eq!("3", cluster.eligible_node_count.render());
    }

    #[test]
    fn reject_non_object_args() {
        let result = serde_json::from_value::<RunDocument>(json!({"args": "scale"}));
        assert!(result.is_err());
    }

    #[test]
    fn reject_non_object_deployment() {
        let result = serde_json::from_value::<Measurement>(json!({"deployments": {"web": 3}}));
        assert!(result.is_err());
    }
}
