use pod_spread_run_model::NormalizedRun;
use serde::{Deserialize, Serialize};

/// One row of the deployments table: a single deployment in a single snapshot of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRow {
    pub region: String,
    pub cluster: String,
    pub namespace: String,
    pub timestamp: String,
    pub measurement_timestamp: String,
    pub scenario: String,
    pub action: String,
    pub deployment_name: String,
    pub total_pods: String,
    pub nodes_used: String,
    pub max_pods: String,
    pub min_pods: String,
    pub node_skew: String,
    pub node_skew_percentage: String,
    pub mean_pods: String,
    pub median_pods: String,
    pub coefficient_of_variation: String,
    pub gini_coefficient: String,
    pub jain_fairness_index: String,
}

impl DeploymentRow {
    /// Project every deployment of every snapshot in the run, in document order.
    pub fn from_run(run: &NormalizedRun) -> Vec<Self> {
        let namespace = run.namespaces_joined();
        let timestamp = run.timestamp.render();

        run.measurements
            .snapshots()
            .iter()
            .flat_map(|measurement| {
                // Only a missing key falls back, an explicit blank or null stays blank
                let measurement_timestamp = if measurement.timestamp.is_absent() {
                    timestamp.clone()
                } else {
                    measurement.timestamp.render()
                };

                measurement
                    .deployments
                    .iter()
                    .map(move |(key, deployment)| (measurement_timestamp.clone(), key, deployment))
            })
            .map(|(measurement_timestamp, key, deployment)| Self {
                region: run.cluster.region.clone(),
                cluster: run.cluster.name.clone(),
                namespace: namespace.clone(),
                timestamp: timestamp.clone(),
                measurement_timestamp,
                scenario: run.scenario.render(),
                action: run.action.render(),
                deployment_name: deployment.name_or(key),
                total_pods: deployment.total_pods.render(),
                nodes_used: deployment.nodes_used.render(),
                max_pods: deployment.max_pods.render(),
                min_pods: deployment.min_pods.render(),
                node_skew: deployment.node_skew.render(),
                node_skew_percentage: deployment.node_skew_percentage.render(),
                mean_pods: deployment.mean_pods.render(),
                median_pods: deployment.median_pods.render(),
                coefficient_of_variation: deployment.coefficient_of_variation.render(),
                gini_coefficient: deployment.gini_coefficient.render(),
                jain_fairness_index: deployment.jain_fairness_index.render(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pod_spread_run_model::load_measurement_run;
    use pretty_assertions::assert_eq;

    fn project(input: &str) -> Vec<DeploymentRow> {
        DeploymentRow::from_run(&load_measurement_run(input.as_bytes()).unwrap())
    }

    #[test]
    fn one_row_per_deployment_per_snapshot() {
        let rows = project(
            r#"{
                "cluster": "c1",
                "timestamp": "t0",
                "args": { "namespaces": ["a", "b"], "scenario": "scale", "action": "down" },
                "measurements": [
                    {
                        "timestamp": "t1",
                        "deployments": {
                            "web": { "total_pods": 6, "nodes_used": 3, "node_skew_percentage": 12.50 },
                            "api": { "name": "api-server", "total_pods": 2 }
                        }
                    },
                    {
                        "deployments": { "web": { "total_pods": 8 } }
                    }
                ]
            }"#,
        );

        let expected_first = DeploymentRow {
            cluster: "c1".to_string(),
            namespace: "a,b".to_string(),
            timestamp: "t0".to_string(),
            measurement_timestamp: "t1".to_string(),
            scenario: "scale".to_string(),
            action: "down".to_string(),
            deployment_name: "web".to_string(),
            total_pods: "6".to_string(),
            nodes_used: "3".to_string(),
            node_skew_percentage: "12.50".to_string(),
            ..Default::default()
        };

        assert_eq!(3, rows.len());
        assert_eq!(expected_first, rows[0]);
        assert_eq!("api-server", rows[1].deployment_name);
        assert_eq!("t1", rows[1].measurement_timestamp);
        // Snapshot without its own timestamp takes the run timestamp
        assert_eq!("t0", rows[2].measurement_timestamp);
        assert_eq!("8", rows[2].total_pods);
    }

    #[test]
    fn blank_name_and_snapshot_timestamp_are_kept() {
        let rows = project(
            r#"{
                "timestamp": "t0",
                "measurements": [
                    { "timestamp": "", "deployments": { "web": { "name": "" } } },
                    { "timestamp": null, "deployments": { "api": { "name": null } } }
                ]
            }"#,
        );

        assert_eq!(2, rows.len());
        assert_eq!("", rows[0].deployment_name);
        assert_eq!("", rows[0].measurement_timestamp);
        assert_eq!("api", rows[1].deployment_name);
        assert_eq!("", rows[1].measurement_timestamp);
    }

    #[test]
    fn measurements_take_precedence_over_measurements_taken() {
        let rows = project(
            r#"{
                "measurements": [
                    { "deployments": { "a": {}, "b": {} } },
                    { "deployments": { "c": {} } }
                ],
                "measurements_taken": [
                    { "deployments": { "x": {}, "y": {}, "z": {}, "w": {} } }
                ]
            }"#,
        );

        assert_eq!(
            vec!["a", "b", "c"],
            rows.iter().map(|r| r.deployment_name.as_str()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn legacy_run_reports_post_snapshot_only() {
        let rows = project(
            r#"{
                "args": { "cluster_context": "arn:aws:eks:us-east-1:1:cluster/c2" },
                "timestamp": "t0",
                "measurements_pre": { "deployments": { "before": {} } },
                "measurements_post": { "deployments": { "after": { "total_pods": 4 } } }
            }"#,
        );

        assert_eq!(1, rows.len());
        assert_eq!("after", rows[0].deployment_name);
        assert_eq!("us-east-1", rows[0].region);
        assert_eq!("c2", rows[0].cluster);
        assert_eq!("t0", rows[0].measurement_timestamp);
    }

    #[test]
    fn run_without_snapshots_has_no_rows() {
        assert!(project(r#"{ "cluster": "c1" }"#).is_empty());
    }
}
