//! Graph validation logic.

use sgf_core::{FiniteCheck, NodeId, SgfResult};

use crate::error::GraphError;
use crate::graph::{Edge, EdgeIndex};

/// Node counts must fit the `u32` id range.
pub(crate) fn validate_node_count(node_count: usize) -> SgfResult<u32> {
    u32::try_from(node_count).map_err(|_| GraphError::TooManyNodes { count: node_count }.into())
}

/// Validate edges: endpoints exist and weights are finite.
pub(crate) fn validate_edges<W: FiniteCheck>(node_count: usize, edges: &[Edge<W>]) -> SgfResult<()> {
    validate_node_count(node_count)?;

    for (idx, edge) in edges.iter().enumerate() {
        for node in [edge.source, edge.target] {
            if node.as_usize() >= node_count {
                return Err(GraphError::InvalidNodeRef {
                    edge: idx,
                    node,
                    node_count,
                }
                .into());
            }
        }

        if let Some(weight) = &edge.weight {
            if !weight.is_finite_weight() {
                return Err(GraphError::NonFiniteWeight { edge: idx }.into());
            }
        }
    }

    Ok(())
}

/// Validate adjacency lists for consistency.
pub(crate) fn validate_adjacency<W>(
    node_count: usize,
    edges: &[Edge<W>],
    out_offsets: &[usize],
    out_edges: &[EdgeIndex],
) -> SgfResult<()> {
    if out_offsets.len() != node_count + 1 {
        return Err(GraphError::InconsistentAdjacency {
            edge: 0,
            node: NodeId::from_index(0),
        }
        .into());
    }

    let mut seen = vec![false; edges.len()];
    for i in 0..node_count {
        let node = NodeId::from_index(i as u32);
        for &edge_idx in &out_edges[out_offsets[i]..out_offsets[i + 1]] {
            let leaves_node = edges.get(edge_idx).is_some_and(|e| e.source == node);
            if !leaves_node || std::mem::replace(&mut seen[edge_idx], true) {
                return Err(GraphError::InconsistentAdjacency {
                    edge: edge_idx,
                    node,
                }
                .into());
            }
        }
    }

    // Every edge should appear
    if let Some(missing) = seen.iter().position(|&s| !s) {
        return Err(GraphError::InconsistentAdjacency {
            edge: missing,
            node: edges[missing].source,
        }
        .into());
    }

    Ok(())
}
