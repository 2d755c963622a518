//! Error types for graph mutation.
//!
//! Lookups never fail: absence is reported through `Option` or an empty
//! sequence. Only edge insertion validates its inputs.

use thiserror::Error;

/// Errors returned when mutating a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The vertex was not created by this graph.
    #[error("vertex {index} does not belong to this graph")]
    InvalidVertex {
        /// Identifier carried by the rejected vertex.
        index: usize,
    },
}

/// Result alias for graph mutations.
pub type Result<T> = core::result::Result<T, GraphError>;
