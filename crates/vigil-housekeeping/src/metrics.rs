//! Metrics collection for housekeeping sweeps

use std::collections::HashMap;
use vigil_domain::ResourceKind;

/// Counters collected across sweep cycles.
///
/// Deletions are tracked per kind for both sweep families; skips and
/// failures are tracked as flat counters since they are re-evaluated every
/// cycle anyway.
#[derive(Debug, Clone, Default)]
pub struct HousekeepingMetrics {
    /// Monitoring objects deleted from the backend, per kind.
    pub backend_deleted: HashMap<ResourceKind, usize>,

    /// Custom resources deleted from the cluster, per kind.
    pub resources_deleted: HashMap<ResourceKind, usize>,

    /// Objects skipped because they carry no owner var.
    pub unowned_skips: usize,

    /// Owner keys that failed to decode.
    pub decode_failures: usize,

    /// Owner probes that failed with something other than not-found.
    pub query_failures: usize,

    /// Delete calls that failed.
    pub delete_failures: usize,

    /// Passes aborted because listing failed.
    pub listing_failures: usize,

    /// Completed sweep cycles.
    pub cycle_count: usize,

    /// Total time spent inside cycles, in seconds.
    pub total_runtime_secs: u64,
}

impl HousekeepingMetrics {
    /// Create new empty metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a backend object deletion.
    pub fn record_backend_deletion(&mut self, kind: ResourceKind) {
        *self.backend_deleted.entry(kind).or_insert(0) += 1;
    }

    /// Record a custom-resource deletion.
    pub fn record_resource_deletion(&mut self, kind: ResourceKind) {
        *self.resources_deleted.entry(kind).or_insert(0) += 1;
    }

    /// Record an object skipped for carrying no owner var.
    pub fn record_unowned_skip(&mut self) {
        self.unowned_skips += 1;
    }

    /// Record an owner key that failed to decode.
    pub fn record_decode_failure(&mut self) {
        self.decode_failures += 1;
    }

    /// Record an owner probe failure other than not-found.
    pub fn record_query_failure(&mut self) {
        self.query_failures += 1;
    }

    /// Record a failed delete call.
    pub fn record_delete_failure(&mut self) {
        self.delete_failures += 1;
    }

    /// Record a pass aborted by a listing failure.
    pub fn record_listing_failure(&mut self) {
        self.listing_failures += 1;
    }

    /// Record a completed sweep cycle.
    pub fn record_cycle(&mut self) {
        self.cycle_count += 1;
    }

    /// Total backend objects deleted across kinds.
    pub fn total_backend_deleted(&self) -> usize {
        self.backend_deleted.values().sum()
    }

    /// Total custom resources deleted across kinds.
    pub fn total_resources_deleted(&self) -> usize {
        self.resources_deleted.values().sum()
    }

    /// Reset all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report of the counters.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Housekeeping Metrics Summary".to_string(),
            "============================".to_string(),
            format!("Sweep cycles: {}", self.cycle_count),
            format!("Total runtime: {}s", self.total_runtime_secs),
        ];

        if !self.backend_deleted.is_empty() {
            lines.push("Backend deletions by kind:".to_string());
            for (kind, count) in &self.backend_deleted {
                lines.push(format!("  {}: {}", kind, count));
            }
            lines.push(format!("  Total: {}", self.total_backend_deleted()));
        }

        if !self.resources_deleted.is_empty() {
            lines.push("Resource deletions by kind:".to_string());
            for (kind, count) in &self.resources_deleted {
                lines.push(format!("  {}: {}", kind, count));
            }
            lines.push(format!("  Total: {}", self.total_resources_deleted()));
        }

        lines.push(format!(
            "Skipped unowned: {}, decode failures: {}, query failures: {}, \
             delete failures: {}, listing failures: {}",
            self.unowned_skips,
            self.decode_failures,
            self.query_failures,
            self.delete_failures,
            self.listing_failures
        ));

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = HousekeepingMetrics::new();
        assert_eq!(metrics.total_backend_deleted(), 0);
        assert_eq!(metrics.total_resources_deleted(), 0);
        assert_eq!(metrics.cycle_count, 0);
    }

    #[test]
    fn test_record_deletions_per_kind() {
        let mut metrics = HousekeepingMetrics::new();
        metrics.record_backend_deletion(ResourceKind::Host);
        metrics.record_backend_deletion(ResourceKind::Host);
        metrics.record_backend_deletion(ResourceKind::Check);
        metrics.record_resource_deletion(ResourceKind::Host);

        assert_eq!(metrics.backend_deleted.get(&ResourceKind::Host), Some(&2));
        assert_eq!(metrics.backend_deleted.get(&ResourceKind::Check), Some(&1));
        assert_eq!(metrics.total_backend_deleted(), 3);
        assert_eq!(metrics.total_resources_deleted(), 1);
    }

    #[test]
    fn test_reset() {
        let mut metrics = HousekeepingMetrics::new();
        metrics.record_backend_deletion(ResourceKind::Host);
        metrics.record_decode_failure();
        metrics.record_cycle();

        metrics.reset();

        assert_eq!(metrics.total_backend_deleted(), 0);
        assert_eq!(metrics.decode_failures, 0);
        assert_eq!(metrics.cycle_count, 0);
    }

    #[test]
    fn test_summary() {
        let mut metrics = HousekeepingMetrics::new();
        metrics.record_backend_deletion(ResourceKind::Host);
        metrics.record_resource_deletion(ResourceKind::Host);
        metrics.record_unowned_skip();
        metrics.record_cycle();
        metrics.total_runtime_secs = 42;

        let summary = metrics.summary();
        assert!(summary.contains("Sweep cycles: 1"));
        assert!(summary.contains("Total runtime: 42s"));
        assert!(summary.contains("host: 1"));
        assert!(summary.contains("Skipped unowned: 1"));
    }
}
