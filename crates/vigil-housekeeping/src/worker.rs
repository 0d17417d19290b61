//! Background worker driving housekeeping cycles

use crate::{Housekeeping, HousekeepingConfig, HousekeepingError, HousekeepingMetrics};
use tokio::time::{interval, Duration};
use vigil_domain::traits::{ClusterCache, MonitoringBackend, ResourceApi};

/// Runs housekeeping cycles on a fixed schedule.
///
/// One cycle at a time: sweeps run inline on the tick, so a slow cycle
/// delays the next tick rather than overlapping it. The worker is idle
/// between cycles and only stops with the host process.
pub struct HousekeepingWorker {
    housekeeping: Housekeeping,
    interval: Duration,
}

impl HousekeepingWorker {
    /// Create a new background worker with the given configuration.
    pub fn new(config: HousekeepingConfig) -> Self {
        let interval = config.sweep_interval();
        Self {
            housekeeping: Housekeeping::new(config),
            interval,
        }
    }

    /// Run the worker until a shutdown signal (Ctrl+C) is received.
    pub async fn run<B, A, C>(
        &mut self,
        mut backend: B,
        mut api: A,
        cache: C,
    ) -> Result<(), HousekeepingError>
    where
        B: MonitoringBackend,
        A: ResourceApi,
        C: ClusterCache,
    {
        let mut ticker = interval(self.interval);

        tracing::info!(
            "housekeeping worker started (interval: {:?})",
            self.interval
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    tracing::debug!("starting housekeeping cycle");
                    let metrics = self.housekeeping.run_cycle(&mut backend, &mut api, &cache);
                    tracing::info!(
                        "cycle completed: {} backend objects and {} resources deleted so far",
                        metrics.total_backend_deleted(),
                        metrics.total_resources_deleted()
                    );
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("shutdown signal received, stopping housekeeping");
                    break;
                }
            }
        }

        tracing::info!(
            "housekeeping stopped. Final metrics:\n{}",
            self.housekeeping.metrics().summary()
        );

        Ok(())
    }

    /// Run for a specific number of cycles (useful for testing).
    pub async fn run_cycles<B, A, C>(
        &mut self,
        mut backend: B,
        mut api: A,
        cache: C,
        cycles: usize,
    ) -> Result<(), HousekeepingError>
    where
        B: MonitoringBackend,
        A: ResourceApi,
        C: ClusterCache,
    {
        let mut ticker = interval(self.interval);

        tracing::info!(
            "housekeeping worker started for {} cycles (interval: {:?})",
            cycles,
            self.interval
        );

        for cycle in 0..cycles {
            ticker.tick().await;
            tracing::debug!("starting housekeeping cycle {}/{}", cycle + 1, cycles);
            self.housekeeping.run_cycle(&mut backend, &mut api, &cache);
        }

        tracing::info!(
            "housekeeping finished {} cycles. Final metrics:\n{}",
            cycles,
            self.housekeeping.metrics().summary()
        );

        Ok(())
    }

    /// Get a reference to the worker's current metrics.
    pub fn metrics(&self) -> &HousekeepingMetrics {
        self.housekeeping.metrics()
    }

    /// Reset the worker's metrics counters.
    pub fn reset_metrics(&mut self) {
        self.housekeeping.reset_metrics();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use vigil_domain::{
        Check, CustomResource, Host, HostGroup, ResourceKind, Vars, VAR_CLUSTER, VAR_OWNER,
    };

    #[derive(Default)]
    struct MockBackend {
        hosts: Vec<Host>,
        deleted_hosts: Vec<String>,
    }

    impl MonitoringBackend for MockBackend {
        type Error = String;

        fn list_host_groups(&self) -> Result<Vec<HostGroup>, String> {
            Ok(Vec::new())
        }

        fn list_hosts(&self) -> Result<Vec<Host>, String> {
            Ok(self.hosts.clone())
        }

        fn list_services(&self) -> Result<Vec<Check>, String> {
            Ok(Vec::new())
        }

        fn delete_host_group(&mut self, _name: &str) -> Result<(), String> {
            Ok(())
        }

        fn delete_host(&mut self, name: &str) -> Result<(), String> {
            self.deleted_hosts.push(name.to_string());
            Ok(())
        }

        fn delete_service(&mut self, _full_name: &str) -> Result<(), String> {
            Ok(())
        }
    }

    struct EmptyApi;

    impl ResourceApi for EmptyApi {
        type Error = String;

        fn get(
            &self,
            _kind: ResourceKind,
            _namespace: &str,
            _name: &str,
        ) -> Result<Option<CustomResource>, String> {
            Ok(None)
        }

        fn delete(
            &mut self,
            _kind: ResourceKind,
            _namespace: &str,
            _name: &str,
        ) -> Result<(), String> {
            Ok(())
        }
    }

    struct EmptyCache;

    impl ClusterCache for EmptyCache {
        type Error = String;

        fn list_resources(&self, _kind: ResourceKind) -> Result<Vec<CustomResource>, String> {
            Ok(Vec::new())
        }

        fn pod_exists(&self, _namespace: &str, _name: &str) -> Result<bool, String> {
            Ok(false)
        }

        fn deployment_exists(&self, _namespace: &str, _name: &str) -> Result<bool, String> {
            Ok(false)
        }

        fn daemon_set_exists(&self, _namespace: &str, _name: &str) -> Result<bool, String> {
            Ok(false)
        }

        fn replica_set_exists(&self, _namespace: &str, _name: &str) -> Result<bool, String> {
            Ok(false)
        }

        fn stateful_set_exists(&self, _namespace: &str, _name: &str) -> Result<bool, String> {
            Ok(false)
        }

        fn node_exists(&self, _name: &str) -> Result<bool, String> {
            Ok(false)
        }
    }

    fn orphan_host(name: &str) -> Host {
        let mut vars = Vars::new();
        vars.insert(VAR_CLUSTER, "prod");
        vars.insert(VAR_OWNER, "ns1/cr1");
        Host {
            name: name.to_string(),
            vars: Some(vars),
        }
    }

    #[tokio::test]
    async fn test_worker_creation() {
        let worker = HousekeepingWorker::new(HousekeepingConfig::new("prod"));
        assert_eq!(worker.metrics().cycle_count, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_cycles_counts_cycles() {
        let backend = MockBackend::default();
        let mut worker = HousekeepingWorker::new(HousekeepingConfig::new("prod"));

        worker
            .run_cycles(backend, EmptyApi, EmptyCache, 3)
            .await
            .unwrap();

        assert_eq!(worker.metrics().cycle_count, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_cycles_prunes_orphans() {
        let backend = MockBackend {
            hosts: vec![orphan_host("h1")],
            ..Default::default()
        };
        let mut worker = HousekeepingWorker::new(HousekeepingConfig::new("prod"));

        worker
            .run_cycles(backend, EmptyApi, EmptyCache, 1)
            .await
            .unwrap();

        assert_eq!(worker.metrics().total_backend_deleted(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_metrics() {
        let mut worker = HousekeepingWorker::new(HousekeepingConfig::new("prod"));

        worker
            .run_cycles(MockBackend::default(), EmptyApi, EmptyCache, 1)
            .await
            .unwrap();
        assert_eq!(worker.metrics().cycle_count, 1);

        worker.reset_metrics();
        assert_eq!(worker.metrics().cycle_count, 0);
    }
}
