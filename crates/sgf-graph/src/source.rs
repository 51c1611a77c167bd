//! The read-only graph contract consumed by the encoder.

use core::fmt;
use sgf_core::NodeId;

/// One outgoing edge as reported by a [`GraphSource`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRef<'a, W> {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: Option<&'a W>,
}

impl<'a, W> EdgeRef<'a, W> {
    pub fn new(source: NodeId, target: NodeId, weight: Option<&'a W>) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

/// A graph that can be serialized.
///
/// Implementors report their declared totals and expose ordered iteration
/// over node ids and, per node, over that node's outgoing edges.
///
/// Encoding only succeeds when `node_ids` yields `0, 1, .., node_count() - 1`
/// in exactly that order, and every edge yielded by `out_edges(n)` reports
/// `n` as its source. Implementations backed by hash maps or other unordered
/// storage must sort before yielding.
pub trait GraphSource {
    /// Edge weight; rendered through `Display` in edge tokens.
    type Weight: fmt::Display;

    /// Display label. Written verbatim after `# name: `, so it must not
    /// contain line breaks; the encoder rejects names that do.
    fn name(&self) -> &str;

    fn is_directed(&self) -> bool;

    /// Declared number of nodes.
    fn node_count(&self) -> usize;

    /// Declared number of edges.
    fn edge_count(&self) -> usize;

    /// Node ids in native iteration order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_;

    /// Outgoing edges of `node` in native order.
    fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeRef<'_, Self::Weight>> + '_;
}

impl<G: GraphSource + ?Sized> GraphSource for &G {
    type Weight = G::Weight;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_directed(&self) -> bool {
        (**self).is_directed()
    }

    fn node_count(&self) -> usize {
        (**self).node_count()
    }

    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (**self).node_ids()
    }

    fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeRef<'_, Self::Weight>> + '_ {
        (**self).out_edges(node)
    }
}

/// Weight type for graphs whose edges never carry a weight.
///
/// Uninhabited: an `Option<&Unweighted>` is always `None`, so such edges
/// always encode as a bare target.
pub type Unweighted = core::convert::Infallible;
