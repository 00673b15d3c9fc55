use pod_spread_run_model::NormalizedRun;
use serde::{Deserialize, Serialize};

/// One row of the summary table, describing a whole measurement run.
///
/// Field order is the column order of the CSV.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub region: String,
    pub cluster: String,
    pub timestamp: String,
    pub scenario: String,
    pub action: String,
    pub namespaces: String,
    pub elapsed_time: String,
    pub scale_direction: String,
    pub scale_amount: String,
    pub scale_percentage: String,
    pub jain_fairness_index_mean: String,
    pub jain_fairness_index_median: String,
    pub coefficient_of_variation_mean: String,
    pub coefficient_of_variation_median: String,
    pub gini_coefficient_mean: String,
    pub gini_coefficient_median: String,
    pub node_skew_mean: String,
    pub node_skew_median: String,
    pub node_skew_max: String,
    pub node_skew_percentage_mean: String,
    pub node_skew_percentage_median: String,
    pub node_skew_percentage_max: String,
    pub nodes_used_avg: String,
    pub nodes_used_median: String,
    pub nodes_used_max: String,
    pub nodes_used_min: String,
    pub node_count: String,
    pub eligible_node_count: String,
    pub deployment_count: String,
}

impl SummaryRow {
    pub fn from_run(run: &NormalizedRun) -> Self {
        let stats = &run.postprocessed;
        let snapshot = run.measurements.summary();

        Self {
            region: run.cluster.region.clone(),
            cluster: run.cluster.name.clone(),
            timestamp: run.timestamp.render(),
            scenario: run.scenario.render(),
            action: run.action.render(),
            namespaces: run.namespaces_joined(),
            elapsed_time: run.elapsed_time.render(),
            scale_direction: stats.scale_direction.render(),
            scale_amount: stats.scale_amount.render(),
            scale_percentage: stats.scale_percentage.render(),
            jain_fairness_index_mean: stats.jain_fairness_index_mean.render(),
            jain_fairness_index_median: stats.jain_fairness_index_median.render(),
            coefficient_of_variation_mean: stats.coefficient_of_variation_mean.render(),
            coefficient_of_variation_median: stats.coefficient_of_variation_median.render(),
            gini_coefficient_mean: stats.gini_coefficient_mean.render(),
            gini_coefficient_median: stats.gini_coefficient_median.render(),
            node_skew_mean: stats.node_skew_mean.render(),
            node_skew_median: stats.node_skew_median.render(),
            node_skew_max: stats.node_skew_max.render(),
            node_skew_percentage_mean: stats.node_skew_percentage_mean.render(),
            node_skew_percentage_median: stats.node_skew_percentage_median.render(),
            node_skew_percentage_max: stats.node_skew_percentage_max.render(),
            nodes_used_avg: stats.nodes_used_avg.render(),
            nodes_used_median: stats.nodes_used_median.render(),
            nodes_used_max: stats.nodes_used_max.render(),
            nodes_used_min: stats.nodes_used_min.render(),
            node_count: snapshot.cluster.node_count.render(),
            eligible_node_count: snapshot.cluster.eligible_node_count.render(),
            deployment_count: render_deployment_count(snapshot.deployment_count),
        }
    }
}

/// Zero deployments is written as an empty cell, the same as an unknown count.
fn render_deployment_count(count: usize) -> String {
    match count {
        0 => String::new(),
        n => n.to_string(),
    }
}
