//! Incremental graph builder.

use sgf_core::{FiniteCheck, NodeId, SgfResult};

use crate::graph::{AdjacencyGraph, Edge, EdgeIndex};
use crate::validate;

/// Builder for constructing a graph incrementally.
///
/// Use `add_node` and `add_edge` to build up the graph, then call `build()`
/// to validate and freeze it into an immutable `AdjacencyGraph`. Node ids are
/// handed out in order, so built graphs are always zero-indexed and
/// contiguous.
#[derive(Debug)]
pub struct GraphBuilder<W> {
    name: String,
    directed: bool,
    node_count: usize,
    edges: Vec<Edge<W>>,
}

impl<W> GraphBuilder<W> {
    /// Create a new empty builder.
    pub fn new(name: impl Into<String>, directed: bool) -> Self {
        Self {
            name: name.into(),
            directed,
            node_count: 0,
            edges: Vec::new(),
        }
    }

    pub fn directed(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    pub fn undirected(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn reserve_edges(&mut self, additional: usize) {
        self.edges.reserve(additional);
    }

    /// Add a node and return its id.
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId::from_index(self.node_count as u32);
        self.node_count += 1;
        id
    }

    /// Add `n` nodes, returning the first and last id (inclusive).
    ///
    /// For `n == 0` both ids are the next id that would be handed out and no
    /// node is added.
    pub fn add_nodes(&mut self, n: usize) -> (NodeId, NodeId) {
        let first = NodeId::from_index(self.node_count as u32);
        if n == 0 {
            return (first, first);
        }
        self.node_count += n;
        let last = NodeId::from_index((self.node_count - 1) as u32);
        (first, last)
    }

    /// Add an unweighted edge. Endpoints are checked by `build()`.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> EdgeIndex {
        self.push_edge(source, target, None)
    }

    pub fn add_weighted_edge(&mut self, source: NodeId, target: NodeId, weight: W) -> EdgeIndex {
        self.push_edge(source, target, Some(weight))
    }

    fn push_edge(&mut self, source: NodeId, target: NodeId, weight: Option<W>) -> EdgeIndex {
        let idx = self.edges.len();
        self.edges.push(Edge {
            source,
            target,
            weight,
        });
        idx
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<W: FiniteCheck> GraphBuilder<W> {
    /// Build and validate the graph, returning an immutable `AdjacencyGraph`.
    pub fn build(self) -> SgfResult<AdjacencyGraph<W>> {
        validate::validate_edges(self.node_count, &self.edges)?;

        let (out_offsets, out_edges) = Self::build_adjacency(self.node_count, &self.edges);

        validate::validate_adjacency(self.node_count, &self.edges, &out_offsets, &out_edges)?;

        let mut in_degrees = vec![0; self.node_count];
        for edge in &self.edges {
            in_degrees[edge.target.as_usize()] += 1;
        }

        Ok(AdjacencyGraph {
            name: self.name,
            directed: self.directed,
            node_count: self.node_count,
            edges: self.edges,
            out_offsets,
            out_edges,
            in_degrees,
        })
    }

    /// Counting sort of edge indices by source; stable, so each node's list
    /// keeps insertion order.
    fn build_adjacency(node_count: usize, edges: &[Edge<W>]) -> (Vec<usize>, Vec<EdgeIndex>) {
        let mut offsets = vec![0; node_count + 1];
        for edge in edges {
            offsets[edge.source.as_usize() + 1] += 1;
        }
        for i in 0..node_count {
            offsets[i + 1] += offsets[i];
        }

        let mut cursor = offsets.clone();
        let mut flat = vec![0; edges.len()];
        for (idx, edge) in edges.iter().enumerate() {
            let slot = &mut cursor[edge.source.as_usize()];
            flat[*slot] = idx;
            *slot += 1;
        }

        (offsets, flat)
    }
}
