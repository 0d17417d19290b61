//! Trait seams for the two backends and the cluster caches
//!
//! These traits define the boundary between sweep logic and infrastructure
//! clients; implementations live outside this workspace. Point-gets surface
//! "not found" in the Ok arm (`Ok(None)` / `Ok(false)`); an `Err` is a
//! query failure and never a deletion trigger.

use crate::{Check, CustomResource, Host, HostGroup, ResourceKind};

/// Client for the monitoring backend's object API.
pub trait MonitoringBackend {
    /// Error type for backend calls.
    type Error: std::fmt::Display;

    /// List every host group in the backend.
    fn list_host_groups(&self) -> Result<Vec<HostGroup>, Self::Error>;

    /// List every host in the backend.
    fn list_hosts(&self) -> Result<Vec<Host>, Self::Error>;

    /// List every service check in the backend.
    fn list_services(&self) -> Result<Vec<Check>, Self::Error>;

    /// Delete a host group by name.
    fn delete_host_group(&mut self, name: &str) -> Result<(), Self::Error>;

    /// Delete a host by name.
    fn delete_host(&mut self, name: &str) -> Result<(), Self::Error>;

    /// Delete a check by its compound `host!name` identifier.
    fn delete_service(&mut self, full_name: &str) -> Result<(), Self::Error>;
}

/// Client for the cluster's custom-resource API.
pub trait ResourceApi {
    /// Error type for API calls.
    type Error: std::fmt::Display;

    /// Point-get a resource; `Ok(None)` is a confirmed not-found.
    fn get(
        &self,
        kind: ResourceKind,
        namespace: &str,
        name: &str,
    ) -> Result<Option<CustomResource>, Self::Error>;

    /// Delete a resource by namespace and name.
    fn delete(&mut self, kind: ResourceKind, namespace: &str, name: &str)
        -> Result<(), Self::Error>;
}

/// Read-only view over the cluster's informer caches.
pub trait ClusterCache {
    /// Error type for cache reads.
    type Error: std::fmt::Display;

    /// Full enumeration of the cached resources of one kind. There is no
    /// selector: tag filtering happens in the sweep.
    fn list_resources(&self, kind: ResourceKind) -> Result<Vec<CustomResource>, Self::Error>;

    /// Whether the named pod exists in `namespace`.
    fn pod_exists(&self, namespace: &str, name: &str) -> Result<bool, Self::Error>;

    /// Whether the named deployment exists in `namespace`.
    fn deployment_exists(&self, namespace: &str, name: &str) -> Result<bool, Self::Error>;

    /// Whether the named daemon set exists in `namespace`.
    fn daemon_set_exists(&self, namespace: &str, name: &str) -> Result<bool, Self::Error>;

    /// Whether the named replica set exists in `namespace`.
    fn replica_set_exists(&self, namespace: &str, name: &str) -> Result<bool, Self::Error>;

    /// Whether the named stateful set exists in `namespace`.
    fn stateful_set_exists(&self, namespace: &str, name: &str) -> Result<bool, Self::Error>;

    /// Whether the named node exists. Nodes are cluster-scoped.
    fn node_exists(&self, name: &str) -> Result<bool, Self::Error>;
}
