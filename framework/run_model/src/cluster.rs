/// Prefix of an EKS cluster ARN, as written to `args.cluster_context` by older benchmark runs.
pub const EKS_ARN_PREFIX: &str = "arn:aws:eks:";

/// The cluster a run was measured against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterIdentity {
    /// AWS region, only known when the cluster was identified by an ARN.
    pub region: String,
    /// Cluster name.
    pub name: String,
}

impl ClusterIdentity {
    /// A cluster known only by name, with no region.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            region: String::new(),
            name: name.into(),
        }
    }

    /// Identify a cluster from a kube context string.
    ///
    /// EKS ARNs of the form `arn:aws:eks:<region>:<account>:cluster/<name>` are split
    /// positionally. Anything else is taken to be a plain cluster name.
    ///
    /// Short or malformed ARNs are tolerated, missing parts come back as empty strings.
    pub fn from_context(context: &str) -> Self {
        if !context.starts_with(EKS_ARN_PREFIX) {
            return Self::named(context);
        }

        let parts = context.split(':').collect::<Vec<_>>();
        let region = parts.get(3).copied().unwrap_or_default();
        let name = parts
            .get(5)
            .and_then(|resource| resource.rsplit('/').next())
            .unwrap_or_default();

        Self {
            region: region.to_string(),
            name: name.to_string(),
        }
    }
}
