//! Core graph data structures.

use sgf_core::{NodeId, Real};

use crate::source::{EdgeRef, GraphSource};

/// Position of an edge in insertion order.
pub type EdgeIndex = usize;

/// A stored edge. `weight` is `None` for unweighted edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<W> {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: Option<W>,
}

/// A validated, immutable multi-edged graph.
///
/// Nodes are numbered `0..node_count` by construction. Edges are stored in
/// insertion order; a compact adjacency (`out_offsets`/`out_edges`) lists each
/// node's outgoing edges in that same order. Undirected graphs store each
/// edge once, under the endpoint it was added from.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<W = Real> {
    pub(crate) name: String,
    pub(crate) directed: bool,
    pub(crate) node_count: usize,
    pub(crate) edges: Vec<Edge<W>>,

    /// Node i's outgoing edges are out_edges[out_offsets[i]..out_offsets[i+1]].
    pub(crate) out_offsets: Vec<usize>,
    pub(crate) out_edges: Vec<EdgeIndex>,

    pub(crate) in_degrees: Vec<usize>,
}

impl<W> AdjacencyGraph<W> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Get an edge by index (returns None if out of bounds).
    pub fn edge(&self, idx: EdgeIndex) -> Option<&Edge<W>> {
        self.edges.get(idx)
    }

    /// Outgoing edge indices of a node, empty for unknown nodes.
    pub fn out_edge_indices(&self, node: NodeId) -> &[EdgeIndex] {
        let idx = node.as_usize();
        if idx >= self.node_count {
            return &[];
        }
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_edges[start..end]
    }

    pub fn out_degree(&self, node: NodeId) -> usize {
        self.out_edge_indices(node).len()
    }

    pub fn in_degree(&self, node: NodeId) -> usize {
        self.in_degrees.get(node.as_usize()).copied().unwrap_or(0)
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.in_degree(node) + self.out_degree(node)
    }

    /// Returns true if `source` has an outgoing edge to `target`.
    pub fn has_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.out_edge_indices(source)
            .iter()
            .any(|&e| self.edges[e].target == target)
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        // node_count fits in u32, checked by the builder
        (0..self.node_count as u32).map(NodeId::from_index)
    }
}

impl<W: std::fmt::Display> GraphSource for AdjacencyGraph<W> {
    type Weight = W;

    fn name(&self) -> &str {
        &self.name
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn node_count(&self) -> usize {
        self.node_count
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        AdjacencyGraph::node_ids(self)
    }

    fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeRef<'_, W>> + '_ {
        self.out_edge_indices(node).iter().map(move |&e| {
            let edge = &self.edges[e];
            EdgeRef::new(edge.source, edge.target, edge.weight.as_ref())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;

    #[test]
    fn degrees_and_membership() {
        let mut b = GraphBuilder::<f64>::directed("g");
        let [n0, n1, n2] = [b.add_node(), b.add_node(), b.add_node()];
        b.add_edge(n0, n1);
        b.add_edge(n0, n2);
        b.add_edge(n2, n1);
        let g = b.build().unwrap();

        assert_eq!(g.out_degree(n0), 2);
        assert_eq!(g.in_degree(n1), 2);
        assert_eq!(g.degree(n2), 2);
        assert!(g.has_edge(n2, n1));
        assert!(!g.has_edge(n1, n2));
    }

    #[test]
    fn unknown_node_has_no_edges() {
        let g = GraphBuilder::<f64>::undirected("empty").build().unwrap();
        let bogus = NodeId::from_index(99);
        assert!(g.out_edge_indices(bogus).is_empty());
        assert_eq!(g.degree(bogus), 0);
    }

    #[test]
    fn out_edges_keep_insertion_order() {
        let mut b = GraphBuilder::<f64>::directed("g");
        let (first, last) = b.add_nodes(4);
        b.add_edge(first, last);
        b.add_weighted_edge(first, NodeId::from_index(1), 1.5);
        b.add_edge(first, NodeId::from_index(2));
        let g = b.build().unwrap();

        let targets: Vec<u32> = GraphSource::out_edges(&g, first)
            .map(|e| e.target.index())
            .collect();
        assert_eq!(targets, vec![3, 1, 2]);
    }
}
