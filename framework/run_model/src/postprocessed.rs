use crate::scalar::Scalar;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Aggregate statistics computed by the benchmark after a run.
///
/// These are reported as-is, nothing here is recomputed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PostprocessedStats {
    pub scale_direction: Scalar,
    pub scale_amount: Scalar,
    pub scale_percentage: Scalar,
    pub jain_fairness_index_mean: Scalar,
    pub jain_fairness_index_median: Scalar,
    pub coefficient_of_variation_mean: Scalar,
    pub coefficient_of_variation_median: Scalar,
    pub gini_coefficient_mean: Scalar,
    pub gini_coefficient_median: Scalar,
    pub node_skew_mean: Scalar,
    pub node_skew_median: Scalar,
    pub node_skew_max: Scalar,
    pub node_skew_percentage_mean: Scalar,
    pub node_skew_percentage_median: Scalar,
    pub node_skew_percentage_max: Scalar,

    // Compatibility shim: the benchmark writes these four keys as `nosed_used_*`. They are read
    // under that spelling and exposed as `nodes_used_*`. Drop the renames once no input files
    // with the misspelled keys are left to export.
    #[serde(rename = "nosed_used_avg")]
    pub nodes_used_avg: Scalar,
    #[serde(rename = "nosed_used_median")]
    pub nodes_used_median: Scalar,
    #[serde(rename = "nosed_used_max")]
    pub nodes_used_max: Scalar,
    #[serde(rename = "nosed_used_min")]
    pub nodes_used_min: Scalar,
}

impl PostprocessedStats {
    /// Read the statistics out of a `postprocessed` block. Unknown keys are ignored.
    pub fn from_block(block: Map<String, Value>) -> serde_json::Result<Self> {
        serde_json::from_value(Value::Object(block))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn block(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn read_misspelled_nodes_used_keys() {
        let stats = PostprocessedStats::from_block(block(json!({
            "nosed_used_avg": 7,
            "nosed_used_median": 6.5,
            "nosed_used_max": 9,
            "nosed_used_min": 4,
        })))
        .unwrap();

        assert_eq!("7", stats.nodes_used_avg.render());
        assert_eq!("6.5", stats.nodes_used_median.render());
        assert_eq!("9", stats.nodes_used_max.render());
        assert_eq!("4", stats.nodes_used_min.render());
    }

    #[test]
    fn correctly_spelled_keys_are_not_read() {
        let stats =
            PostprocessedStats::from_block(block(json!({ "nodes_used_avg": 7 }))).unwrap();
        assert!(!stats.nodes_used_avg.is_present());
    }

    #[test]
    fn ignore_unknown_keys() {
        let stats = PostprocessedStats::from_block(block(json!({
            "scale_direction": "up",
            "pods_per_node_histogram": [1, 2, 3],
        })))
        .unwrap();
        assert_eq!("up", stats.scale_direction.render());
    }
}
