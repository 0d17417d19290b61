//! Owner existence resolution against the two authoritative stores
//!
//! Both probes map "not found" into `Ok(false)` and keep every other
//! failure in the `Err` arm, so callers can only delete on a confirmed
//! absence.

use vigil_domain::traits::{ClusterCache, ResourceApi};
use vigil_domain::{OwnerKey, OwnerReference, ResourceKind, WorkloadKind};

/// Probe the custom-resource API for the owner of a backend object.
pub fn resource_owner_exists<A: ResourceApi>(
    api: &A,
    kind: ResourceKind,
    key: &OwnerKey,
) -> Result<bool, A::Error> {
    Ok(api.get(kind, key.namespace(), key.name())?.is_some())
}

/// Probe the cached listers for the workload owner of a custom resource.
///
/// Dispatch is over the closed [`WorkloadKind`] set. A kind this controller
/// does not understand resolves to present, so it can never trigger a
/// deletion.
pub fn workload_owner_exists<C: ClusterCache>(
    cache: &C,
    namespace: &str,
    reference: &OwnerReference,
) -> Result<bool, C::Error> {
    let kind = match WorkloadKind::parse(&reference.kind) {
        Some(kind) => kind,
        None => return Ok(true),
    };

    match kind {
        WorkloadKind::Pod => cache.pod_exists(namespace, &reference.name),
        WorkloadKind::Deployment => cache.deployment_exists(namespace, &reference.name),
        WorkloadKind::DaemonSet => cache.daemon_set_exists(namespace, &reference.name),
        WorkloadKind::ReplicaSet => cache.replica_set_exists(namespace, &reference.name),
        WorkloadKind::StatefulSet => cache.stateful_set_exists(namespace, &reference.name),
        WorkloadKind::Node => cache.node_exists(&reference.name),
    }
}
