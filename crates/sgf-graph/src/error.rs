//! Graph-specific error types.

use sgf_core::{NodeId, SgfError};

use crate::graph::EdgeIndex;

/// Graph construction and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint refers to a node that doesn't exist.
    InvalidNodeRef {
        edge: EdgeIndex,
        node: NodeId,
        node_count: usize,
    },

    /// An edge carries a NaN or infinite weight.
    NonFiniteWeight { edge: EdgeIndex },

    /// Adjacency is inconsistent (edge listed under a node it doesn't leave,
    /// listed twice, or missing).
    InconsistentAdjacency { edge: EdgeIndex, node: NodeId },

    /// More nodes than a `u32` id can address.
    TooManyNodes { count: usize },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::InvalidNodeRef {
                edge,
                node,
                node_count,
            } => {
                write!(
                    f,
                    "Edge {} refers to non-existent node {} (graph has {} nodes)",
                    edge, node, node_count
                )
            }
            GraphError::NonFiniteWeight { edge } => {
                write!(f, "Edge {} has a non-finite weight", edge)
            }
            GraphError::InconsistentAdjacency { edge, node } => {
                write!(
                    f,
                    "Edge {} in node {}'s adjacency list but doesn't leave that node",
                    edge, node
                )
            }
            GraphError::TooManyNodes { count } => {
                write!(f, "{} nodes exceed the node id range", count)
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for SgfError {
    fn from(err: GraphError) -> Self {
        SgfError::Invariant {
            what: err.to_string(),
        }
    }
}
