//! Sweep passes over the monitoring backend and the cluster caches

use crate::{resolve, HousekeepingConfig, HousekeepingError, HousekeepingMetrics};
use std::time::SystemTime;
use tracing::{debug, error, info, warn};
use vigil_domain::traits::{ClusterCache, MonitoringBackend, ResourceApi};
use vigil_domain::{MonitoredObject, OwnerKey, ResourceKind, Vars};

/// The housekeeping engine.
///
/// Runs backend-truth sweeps over the three monitoring object kinds and
/// cluster-truth sweeps over the configured custom-resource kinds. Passes
/// share nothing but the config and metrics: each lists, decides and acts
/// on its own, and a failure in one never blocks another. Convergence is
/// re-evaluated from scratch every cycle; no ledger is kept between
/// cycles.
///
/// # Examples
///
/// ```
/// use vigil_housekeeping::{Housekeeping, HousekeepingConfig};
///
/// let housekeeping = Housekeeping::new(HousekeepingConfig::new("prod"));
/// assert_eq!(housekeeping.metrics().cycle_count, 0);
/// // housekeeping.run_cycle(&mut backend, &mut api, &cache) with your
/// // collaborator implementations, or hand it to HousekeepingWorker.
/// ```
pub struct Housekeeping {
    config: HousekeepingConfig,
    metrics: HousekeepingMetrics,
}

impl Housekeeping {
    /// Create a new engine with the given configuration.
    pub fn new(config: HousekeepingConfig) -> Self {
        Self {
            config,
            metrics: HousekeepingMetrics::new(),
        }
    }

    /// Get a reference to the current metrics.
    pub fn metrics(&self) -> &HousekeepingMetrics {
        &self.metrics
    }

    /// Reset metrics counters.
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Run one full cycle: host groups, hosts, checks, then the configured
    /// cluster-truth sweeps.
    ///
    /// A listing failure aborts only the failing pass for this cycle; the
    /// remaining passes still run. Returns the updated metrics.
    pub fn run_cycle<B, A, C>(
        &mut self,
        backend: &mut B,
        api: &mut A,
        cache: &C,
    ) -> &HousekeepingMetrics
    where
        B: MonitoringBackend,
        A: ResourceApi,
        C: ClusterCache,
    {
        let start = SystemTime::now();

        let outcome = self.sweep_host_groups(backend, api);
        self.note_pass(outcome);
        let outcome = self.sweep_hosts(backend, api);
        self.note_pass(outcome);
        let outcome = self.sweep_checks(backend, api);
        self.note_pass(outcome);

        for kind in self.config.resource_sweeps.clone() {
            let outcome = self.sweep_resources(kind, api, cache);
            self.note_pass(outcome);
        }

        self.metrics.record_cycle();
        if let Ok(elapsed) = start.elapsed() {
            self.metrics.total_runtime_secs += elapsed.as_secs();
        }

        &self.metrics
    }

    fn note_pass(&mut self, outcome: Result<usize, HousekeepingError>) {
        if let Err(err) = outcome {
            self.metrics.record_listing_failure();
            error!("housekeeping: {}", err);
        }
    }

    /// Sweep backend host groups whose owning resource is gone.
    fn sweep_host_groups<B, A>(
        &mut self,
        backend: &mut B,
        api: &A,
    ) -> Result<usize, HousekeepingError>
    where
        B: MonitoringBackend,
        A: ResourceApi,
    {
        let groups = backend
            .list_host_groups()
            .map_err(|e| HousekeepingError::BackendListing {
                kind: ResourceKind::HostGroup,
                message: e.to_string(),
            })?;
        Ok(self.sweep_backend_objects(ResourceKind::HostGroup, &groups, backend, api))
    }

    /// Sweep backend hosts whose owning resource is gone.
    fn sweep_hosts<B, A>(&mut self, backend: &mut B, api: &A) -> Result<usize, HousekeepingError>
    where
        B: MonitoringBackend,
        A: ResourceApi,
    {
        let hosts = backend
            .list_hosts()
            .map_err(|e| HousekeepingError::BackendListing {
                kind: ResourceKind::Host,
                message: e.to_string(),
            })?;
        Ok(self.sweep_backend_objects(ResourceKind::Host, &hosts, backend, api))
    }

    /// Sweep backend checks whose owning resource is gone.
    fn sweep_checks<B, A>(&mut self, backend: &mut B, api: &A) -> Result<usize, HousekeepingError>
    where
        B: MonitoringBackend,
        A: ResourceApi,
    {
        let checks = backend
            .list_services()
            .map_err(|e| HousekeepingError::BackendListing {
                kind: ResourceKind::Check,
                message: e.to_string(),
            })?;
        Ok(self.sweep_backend_objects(ResourceKind::Check, &checks, backend, api))
    }

    /// Backend-truth pass shared by the three kinds.
    ///
    /// Filters to this controller's tag, decodes each object's owner key,
    /// probes the custom-resource API, and deletes confirmed orphans
    /// individually. Absence of ownership information is never evidence of
    /// orphanhood: unowned and undecodable objects are skipped.
    fn sweep_backend_objects<T, B, A>(
        &mut self,
        kind: ResourceKind,
        objects: &[T],
        backend: &mut B,
        api: &A,
    ) -> usize
    where
        T: MonitoredObject,
        B: MonitoringBackend,
        A: ResourceApi,
    {
        let mut deleted = 0;

        for object in objects {
            if object.vars().and_then(Vars::cluster) != Some(self.config.cluster_tag.as_str()) {
                continue;
            }

            let key = match OwnerKey::decode(object.vars().and_then(Vars::owner)) {
                Ok(key) => key,
                Err(err) if err.is_unowned() => {
                    warn!("housekeeping: {} '{}' has no owner", kind, object.name());
                    self.metrics.record_unowned_skip();
                    continue;
                }
                Err(err) => {
                    error!(
                        "housekeeping: error parsing owner of {} '{}': {}",
                        kind,
                        object.name(),
                        err
                    );
                    self.metrics.record_decode_failure();
                    continue;
                }
            };

            match resolve::resource_owner_exists(api, kind, &key) {
                Ok(true) => {}
                Ok(false) => {
                    if self.config.dry_run {
                        info!(
                            "housekeeping: dry run, would delete {} '{}'",
                            kind,
                            object.name()
                        );
                        continue;
                    }
                    info!("housekeeping: deleting obsolete {} '{}'", kind, object.name());
                    match Self::delete_backend_object(backend, kind, object) {
                        Ok(()) => {
                            deleted += 1;
                            self.metrics.record_backend_deletion(kind);
                        }
                        Err(err) => {
                            error!(
                                "housekeeping: error deleting {} '{}': {}",
                                kind,
                                object.name(),
                                err
                            );
                            self.metrics.record_delete_failure();
                        }
                    }
                }
                Err(err) => {
                    error!(
                        "housekeeping: error getting {} resource for '{}': {}",
                        kind, key, err
                    );
                    self.metrics.record_query_failure();
                }
            }
        }

        deleted
    }

    fn delete_backend_object<B, T>(
        backend: &mut B,
        kind: ResourceKind,
        object: &T,
    ) -> Result<(), B::Error>
    where
        B: MonitoringBackend,
        T: MonitoredObject,
    {
        let name = object.delete_name();
        match kind {
            ResourceKind::HostGroup => backend.delete_host_group(&name),
            ResourceKind::Host => backend.delete_host(&name),
            ResourceKind::Check => backend.delete_service(&name),
        }
    }

    /// Cluster-truth pass: prune cached resources whose workload owner is
    /// gone.
    ///
    /// A resource is only eligible when it carries this controller's tag
    /// and exactly one owner reference; anything else is skipped as
    /// ambiguous. Owner resolution follows the closed workload-kind set,
    /// with unknown kinds treated as present.
    fn sweep_resources<A, C>(
        &mut self,
        kind: ResourceKind,
        api: &mut A,
        cache: &C,
    ) -> Result<usize, HousekeepingError>
    where
        A: ResourceApi,
        C: ClusterCache,
    {
        let resources =
            cache
                .list_resources(kind)
                .map_err(|e| HousekeepingError::ResourceListing {
                    kind,
                    message: e.to_string(),
                })?;

        let mut deleted = 0;

        for resource in &resources {
            debug!(
                "housekeeping: checking {} resource '{}/{}'",
                kind, resource.namespace, resource.name
            );

            if resource.cluster() != Some(self.config.cluster_tag.as_str()) {
                debug!(
                    "housekeeping: skipping '{}/{}': tagged for another controller",
                    resource.namespace, resource.name
                );
                continue;
            }

            let reference = match resource.owner_references.as_slice() {
                [reference] => reference,
                references => {
                    debug!(
                        "housekeeping: skipping '{}/{}': has {} owners, not the expected 1",
                        resource.namespace,
                        resource.name,
                        references.len()
                    );
                    continue;
                }
            };

            match resolve::workload_owner_exists(cache, &resource.namespace, reference) {
                Ok(true) => {}
                Ok(false) => {
                    if self.config.dry_run {
                        info!(
                            "housekeeping: dry run, would delete {} resource '{}/{}'",
                            kind, resource.namespace, resource.name
                        );
                        continue;
                    }
                    info!(
                        "housekeeping: deleting obsolete {} resource '{}/{}' ({} '{}' no longer exists)",
                        kind, resource.namespace, resource.name, reference.kind, reference.name
                    );
                    match api.delete(kind, &resource.namespace, &resource.name) {
                        Ok(()) => {
                            deleted += 1;
                            self.metrics.record_resource_deletion(kind);
                        }
                        Err(err) => {
                            error!(
                                "housekeeping: error deleting {} resource '{}/{}': {}",
                                kind, resource.namespace, resource.name, err
                            );
                            self.metrics.record_delete_failure();
                        }
                    }
                }
                Err(err) => {
                    error!(
                        "housekeeping: error resolving owner of '{}/{}': {}",
                        resource.namespace, resource.name, err
                    );
                    self.metrics.record_query_failure();
                }
            }
        }

        Ok(deleted)
    }
}
