//! `petgraph` adapter.

use core::fmt;

use petgraph::EdgeType;
use petgraph::graph::{Graph, IndexType};
use sgf_core::{NodeId, SgfResult};

use crate::source::{EdgeRef, GraphSource, Unweighted};
use crate::validate;

/// Edge payloads that may carry an SGF weight.
pub trait EdgeWeight {
    type Value: fmt::Display;

    fn weight(&self) -> Option<&Self::Value>;
}

impl EdgeWeight for () {
    type Value = Unweighted;

    fn weight(&self) -> Option<&Unweighted> {
        None
    }
}

impl<T: fmt::Display> EdgeWeight for Option<T> {
    type Value = T;

    fn weight(&self) -> Option<&T> {
        self.as_ref()
    }
}

macro_rules! numeric_edge_weight {
    ($($t:ty),*) => {
        $(impl EdgeWeight for $t {
            type Value = $t;

            fn weight(&self) -> Option<&$t> {
                Some(self)
            }
        })*
    };
}

numeric_edge_weight!(f32, f64, i32, i64, u32, u64);

/// Exposes a `petgraph::Graph` through [`GraphSource`].
///
/// Every stored edge is reported exactly once, under its stored source, in
/// insertion order. For undirected graphs that means an edge added as
/// `(a, b)` appears only in `a`'s line, which keeps the per-node tallies in
/// line with `edge_count()`.
///
/// Construction fails for graphs with more nodes than a `u32` id can address.
pub struct PetgraphSource<'g, N, E, Ty: EdgeType, Ix: IndexType> {
    name: String,
    graph: &'g Graph<N, E, Ty, Ix>,
    by_source: Vec<Vec<usize>>,
}

impl<'g, N, E, Ty: EdgeType, Ix: IndexType> PetgraphSource<'g, N, E, Ty, Ix> {
    pub fn new(name: impl Into<String>, graph: &'g Graph<N, E, Ty, Ix>) -> SgfResult<Self> {
        validate::validate_node_count(graph.node_count())?;
        let mut by_source = vec![Vec::new(); graph.node_count()];
        for (idx, edge) in graph.raw_edges().iter().enumerate() {
            by_source[edge.source().index()].push(idx);
        }
        Ok(Self {
            name: name.into(),
            graph,
            by_source,
        })
    }

    pub fn graph(&self) -> &'g Graph<N, E, Ty, Ix> {
        self.graph
    }
}

impl<N, E: EdgeWeight, Ty: EdgeType, Ix: IndexType> GraphSource for PetgraphSource<'_, N, E, Ty, Ix> {
    type Weight = E::Value;

    fn name(&self) -> &str {
        &self.name
    }

    fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph
            .node_indices()
            .map(|n| node_id(n.index()))
    }

    fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeRef<'_, E::Value>> + '_ {
        let edges = self.graph.raw_edges();
        self.by_source
            .get(node.as_usize())
            .into_iter()
            .flatten()
            .filter_map(move |&idx| edges.get(idx))
            .map(|edge| {
                EdgeRef::new(
                    node_id(edge.source().index()),
                    node_id(edge.target().index()),
                    edge.weight.weight(),
                )
            })
    }
}

/// Indices are below `node_count()`, which `PetgraphSource::new` bounds.
fn node_id(index: usize) -> NodeId {
    NodeId::from_index(u32::try_from(index).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::{DiGraph, UnGraph};

    #[test]
    fn directed_edges_grouped_by_source() {
        let mut g = DiGraph::<(), f64>::new();
        let a = g.add_node(());
        let b = g.add_node(());
        g.add_edge(b, a, 1.0);
        g.add_edge(a, b, 2.5);
        let src = PetgraphSource::new("pg", &g).unwrap();

        assert!(src.is_directed());
        assert_eq!(src.node_count(), 2);
        let from_b: Vec<_> = src.out_edges(NodeId::from_index(1)).collect();
        assert_eq!(from_b.len(), 1);
        assert_eq!(from_b[0].target, NodeId::from_index(0));
        assert_eq!(from_b[0].weight, Some(&1.0));
    }

    #[test]
    fn undirected_edge_reported_once() {
        let mut g = UnGraph::<(), ()>::new_undirected();
        let a = g.add_node(());
        let b = g.add_node(());
        g.add_edge(a, b, ());
        let src = PetgraphSource::new("pg", &g).unwrap();

        assert!(!src.is_directed());
        assert_eq!(src.out_edges(NodeId::from_index(0)).count(), 1);
        assert_eq!(src.out_edges(NodeId::from_index(1)).count(), 0);
        assert!(src.out_edges(NodeId::from_index(0)).all(|e| e.weight.is_none()));
    }

    #[test]
    fn optional_weights_pass_through() {
        let mut g = DiGraph::<(), Option<i64>>::new();
        let a = g.add_node(());
        g.add_edge(a, a, Some(4));
        g.add_edge(a, a, None);
        let src = PetgraphSource::new("pg", &g).unwrap();
        let weights: Vec<_> = src
            .out_edges(NodeId::from_index(0))
            .map(|e| e.weight.copied())
            .collect();
        assert_eq!(weights, vec![Some(4), None]);
    }
}
