//! Vigil Housekeeping
//!
//! Periodic garbage collection for a controller that mirrors cluster
//! resources into an external monitoring backend. Deletions in the cluster
//! (or races during creation) leave the backend holding objects that no
//! longer correspond to anything live; this crate finds and removes them.
//!
//! # Overview
//!
//! Each cycle runs two families of sweeps:
//!
//! - **Backend-truth**: every host group, host and check in the monitoring
//!   backend that carries this controller's cluster tag is checked against
//!   the custom resource named by its `owner` var; objects whose owner is
//!   confirmed gone are deleted from the backend.
//! - **Cluster-truth**: every cached custom resource of the configured
//!   kinds is checked against the workload object in its owner reference;
//!   resources whose workload is confirmed gone are deleted from the
//!   cluster.
//!
//! The loop is best-effort and eventually convergent: no state is carried
//! between cycles, partial failures are logged and retried on the next
//! full rescan, and nothing is ever deleted on ambiguous evidence (missing
//! owner vars, undecodable keys, unknown owner kinds, or query failures).
//!
//! # Usage
//!
//! ```
//! use vigil_housekeeping::{Housekeeping, HousekeepingConfig};
//!
//! let config = HousekeepingConfig::new("prod");
//! let housekeeping = Housekeeping::new(config);
//! assert_eq!(housekeeping.metrics().cycle_count, 0);
//! // Wire `housekeeping.run_cycle(...)` (or `HousekeepingWorker::run` for
//! // the scheduled loop) to your monitoring backend client, cluster
//! // resource API client, and informer caches.
//! ```
//!
//! # Configuration
//!
//! ```toml
//! cluster_tag = "prod"
//! sweep_interval_secs = 60
//! resource_sweeps = ["host"]
//! dry_run = false
//! ```
//!
//! # Metrics
//!
//! Every cycle updates [`HousekeepingMetrics`]: deletions per kind for both
//! sweep families, skip and failure counters, and cycle accounting.
//! [`HousekeepingMetrics::summary`] renders a report for shutdown logging.

#![warn(missing_docs)]

mod config;
mod error;
mod metrics;
mod resolve;
mod sweep;
mod worker;

pub use config::HousekeepingConfig;
pub use error::HousekeepingError;
pub use metrics::HousekeepingMetrics;
pub use resolve::{resource_owner_exists, workload_owner_exists};
pub use sweep::Housekeeping;
pub use worker::HousekeepingWorker;
