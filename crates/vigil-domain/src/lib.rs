//! Vigil Domain Layer
//!
//! Core types and trait seams for the housekeeping subsystem of a controller
//! that mirrors cluster resources into an external monitoring backend.
//!
//! ## Key Concepts
//!
//! - **Monitoring objects**: host groups, hosts and checks as the backend
//!   stores them, with a weakly-typed `vars` mapping carrying provenance
//! - **Owner key**: the `namespace/name` string that links a monitoring
//!   object back to the custom resource it was created from
//! - **Custom resources**: the cluster-side originals, each carrying the
//!   workload owner reference that caused its creation
//! - **Workload kinds**: the closed set of owner kinds the controller
//!   resolves against the cluster caches
//!
//! ## Architecture
//!
//! This crate holds data and decoding only. Infrastructure implementations
//! of the collaborator traits (backend HTTP client, cluster API client,
//! informer caches) live outside this workspace; the sweep engine in
//! `vigil-housekeeping` is generic over the traits defined here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod object;
pub mod owner;
pub mod resource;
pub mod traits;
pub mod workload;

// Re-exports for convenience
pub use object::{Check, Host, HostGroup, MonitoredObject, Vars, VAR_CLUSTER, VAR_OWNER};
pub use owner::{OwnerKey, OwnerKeyError};
pub use resource::{CustomResource, OwnerReference, ResourceKind};
pub use workload::WorkloadKind;
