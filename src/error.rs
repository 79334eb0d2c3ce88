//! Error taxonomy for the placement engine.
//!
//! None of these ever cross the public event entry points: every anomaly
//! degrades to a safe default or a no-op at the boundary. The variants
//! exist so the degradation sites can log precisely what they recovered
//! from.

use crate::types::NodeId;
use thiserror::Error;

/// Anomalies the engine recovers from internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Grid dimensions were unresolvable from the container's styling;
    /// the default configuration is substituted.
    #[error("grid dimensions unresolvable for container {container}")]
    ConfigurationMissing { container: NodeId },

    /// The manipulated element left the document mid-drag; the session
    /// is canceled silently.
    #[error("drag target {node} detached from the document")]
    TargetDetached { node: NodeId },

    /// A stored geometry property was absent or non-numeric; defaults
    /// are materialized in its place.
    #[error("non-numeric geometry in {property} on {node}")]
    InvalidGeometryRead { node: NodeId, property: String },

    /// A drag start was requested while a session is already active;
    /// the request is ignored.
    #[error("drag already in progress")]
    ReentrantStart,
}

/// Result alias for internal engine operations.
pub type GridResult<T> = Result<T, GridError>;
