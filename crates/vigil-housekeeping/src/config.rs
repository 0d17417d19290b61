//! Configuration for housekeeping sweeps

use crate::HousekeepingError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use vigil_domain::ResourceKind;

/// Configuration for the housekeeping engine.
///
/// The cluster tag is the multi-tenancy boundary: every sweep ignores
/// objects whose `cluster` var differs from it. Sharing a backend between
/// two controller instances with the same tag is an operational error this
/// subsystem does not defend against.
///
/// # Examples
///
/// ```
/// use vigil_housekeeping::HousekeepingConfig;
///
/// let config = HousekeepingConfig::new("prod");
/// assert_eq!(config.sweep_interval_secs, 60);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HousekeepingConfig {
    /// Tag identifying this controller instance. Objects tagged otherwise
    /// are out of scope for every sweep.
    pub cluster_tag: String,

    /// Seconds between sweep cycles.
    /// Default: 60. Trades detection latency for backend query load.
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,

    /// Resource kinds that receive a cluster-truth sweep each cycle.
    /// Default: host resources only.
    #[serde(default = "default_resource_sweeps")]
    pub resource_sweeps: Vec<ResourceKind>,

    /// Log what would be deleted without touching either store.
    /// Default: false
    #[serde(default)]
    pub dry_run: bool,
}

fn default_sweep_interval_secs() -> u64 {
    60
}

fn default_resource_sweeps() -> Vec<ResourceKind> {
    vec![ResourceKind::Host]
}

impl HousekeepingConfig {
    /// Configuration for `cluster_tag` with default timing and scope.
    pub fn new(cluster_tag: impl Into<String>) -> Self {
        Self {
            cluster_tag: cluster_tag.into(),
            sweep_interval_secs: default_sweep_interval_secs(),
            resource_sweeps: default_resource_sweeps(),
            dry_run: false,
        }
    }

    /// Parse a TOML document into a config.
    pub fn from_toml_str(raw: &str) -> Result<Self, HousekeepingError> {
        toml::from_str(raw).map_err(|e| HousekeepingError::Config(e.to_string()))
    }

    /// Get the sweep interval as a Duration.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}
