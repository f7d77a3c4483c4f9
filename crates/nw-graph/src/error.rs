//! Graph construction error type.

use thiserror::Error;

use nw_core::NodeId;

/// Errors produced by `nw-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("cannot build a graph with no nodes")]
    Empty,

    #[error("edge threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f32),

    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),
}

pub type GraphResult<T> = Result<T, GraphError>;
