//! Workload kinds that can own a custom resource

use std::fmt;

/// The closed set of workload kinds owner resolution understands.
///
/// A kind string outside this set is never grounds for deletion; new kinds
/// are added here deliberately, not discovered at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkloadKind {
    /// A pod.
    Pod,
    /// A deployment.
    Deployment,
    /// A daemon set.
    DaemonSet,
    /// A replica set.
    ReplicaSet,
    /// A stateful set.
    StatefulSet,
    /// A node. Cluster-scoped; resolved without a namespace.
    Node,
}

impl WorkloadKind {
    /// Parse a cluster-reported kind string. Exact match; kind names are
    /// case-sensitive.
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "Pod" => Some(WorkloadKind::Pod),
            "Deployment" => Some(WorkloadKind::Deployment),
            "DaemonSet" => Some(WorkloadKind::DaemonSet),
            "ReplicaSet" => Some(WorkloadKind::ReplicaSet),
            "StatefulSet" => Some(WorkloadKind::StatefulSet),
            "Node" => Some(WorkloadKind::Node),
            _ => None,
        }
    }

    /// Get the kind name as the cluster reports it.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkloadKind::Pod => "Pod",
            WorkloadKind::Deployment => "Deployment",
            WorkloadKind::DaemonSet => "DaemonSet",
            WorkloadKind::ReplicaSet => "ReplicaSet",
            WorkloadKind::StatefulSet => "StatefulSet",
            WorkloadKind::Node => "Node",
        }
    }
}

impl fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
