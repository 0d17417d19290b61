//! Cluster custom resources and their owner references

use crate::VAR_CLUSTER;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Custom-resource kinds this controller manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Host-group resources, mirrored as backend host groups.
    HostGroup,
    /// Host resources, mirrored as backend hosts.
    Host,
    /// Check resources, mirrored as backend service checks.
    Check,
}

impl ResourceKind {
    /// Get the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::HostGroup => "hostgroup",
            ResourceKind::Host => "host",
            ResourceKind::Check => "check",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed reference to the workload object that caused a resource's
/// creation.
///
/// The kind is kept as the raw cluster-reported string; resolution parses
/// it against the closed [`crate::WorkloadKind`] set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerReference {
    /// Workload kind as reported by the cluster, e.g. `Pod`.
    pub kind: String,
    /// Workload object name, in the resource's namespace.
    pub name: String,
}

/// A cluster-resident custom resource.
///
/// Unlike backend vars, the spec vars of a custom resource are typed
/// string-to-string; the `cluster` var carries the owning controller's tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomResource {
    /// Namespace the resource lives in.
    pub namespace: String,
    /// Resource name.
    pub name: String,
    /// Spec vars.
    #[serde(default)]
    pub vars: HashMap<String, String>,
    /// Workload objects recorded as having caused this resource's creation.
    #[serde(default)]
    pub owner_references: Vec<OwnerReference>,
}

impl CustomResource {
    /// The `cluster` tag, if set.
    pub fn cluster(&self) -> Option<&str> {
        self.vars.get(VAR_CLUSTER).map(String::as_str)
    }
}
