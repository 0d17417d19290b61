//! Error types for housekeeping operations

use thiserror::Error;
use vigil_domain::ResourceKind;

/// Errors surfaced by housekeeping passes.
///
/// Nothing here is fatal: a failing pass is logged, counted, and retried on
/// the next cycle. Per-object failures never reach this type; they are
/// handled inside the pass.
#[derive(Error, Debug)]
pub enum HousekeepingError {
    /// Listing a kind of object from the monitoring backend failed.
    #[error("listing {kind} objects from the backend failed: {message}")]
    BackendListing {
        /// Kind whose pass was aborted.
        kind: ResourceKind,
        /// Collaborator error, stringified at the seam.
        message: String,
    },

    /// Listing cached custom resources failed.
    #[error("listing cached {kind} resources failed: {message}")]
    ResourceListing {
        /// Kind whose pass was aborted.
        kind: ResourceKind,
        /// Collaborator error, stringified at the seam.
        message: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
