//! Graph document schema.

use serde::{Deserialize, Serialize};
use sgf_core::{NodeId, Real};
use sgf_encode::EncodeOptions;
use sgf_graph::{EdgeRef, GraphSource};

/// A graph written out by hand or by another tool.
///
/// ```yaml
/// name: t
/// directed: false
/// nodes:
///   - id: 0
///     edges:
///       - { target: 1, weight: 5 }
///   - id: 1
/// ```
///
/// Nodes are kept in document order; the encoder rejects documents whose ids
/// are not `0, 1, ..` in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDoc {
    pub name: String,
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub nodes: Vec<NodeDef>,
    #[serde(default, skip_serializing_if = "is_default_options")]
    pub encode: EncodeOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDef {
    pub id: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<EdgeDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDef {
    pub target: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Real>,
}

fn is_default_options(options: &EncodeOptions) -> bool {
    *options == EncodeOptions::default()
}

impl GraphDoc {
    pub fn new(name: impl Into<String>, directed: bool) -> Self {
        Self {
            name: name.into(),
            directed,
            nodes: Vec::new(),
            encode: EncodeOptions::default(),
        }
    }

    /// Total edges across all nodes.
    pub fn total_edges(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    /// Definition for `node`; ids are normally positional, so try that first.
    pub fn node(&self, node: NodeId) -> Option<&NodeDef> {
        match self.nodes.get(node.as_usize()) {
            Some(def) if def.id == node.index() => Some(def),
            _ => self.nodes.iter().find(|def| def.id == node.index()),
        }
    }
}

impl GraphSource for GraphDoc {
    type Weight = Real;

    fn name(&self) -> &str {
        &self.name
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.total_edges()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(|def| NodeId::from_index(def.id))
    }

    fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeRef<'_, Real>> + '_ {
        self.node(node).into_iter().flat_map(|def| {
            let source = NodeId::from_index(def.id);
            def.edges.iter().map(move |e| {
                EdgeRef::new(source, NodeId::from_index(e.target), e.weight.as_ref())
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "
name: t
nodes:
  - id: 0
    edges:
      - { target: 1, weight: 5 }
  - id: 1
";

    #[test]
    fn parses_minimal_yaml() {
        let doc: GraphDoc = serde_yaml::from_str(SAMPLE).unwrap();
        assert_eq!(doc.name, "t");
        assert!(!doc.directed);
        assert_eq!(doc.nodes.len(), 2);
        assert_eq!(doc.nodes[0].edges[0].weight, Some(5.0));
        assert!(doc.nodes[1].edges.is_empty());
        assert_eq!(doc.encode, EncodeOptions::default());
    }

    #[test]
    fn encode_options_block() {
        let doc: GraphDoc =
            serde_yaml::from_str("name: x\nencode:\n  check_edge_count: true\n").unwrap();
        assert!(doc.encode.check_edge_count);
    }

    #[test]
    fn node_lookup_falls_back_to_search() {
        let mut doc = GraphDoc::new("g", true);
        doc.nodes.push(NodeDef {
            id: 1,
            edges: vec![],
        });
        doc.nodes.push(NodeDef {
            id: 0,
            edges: vec![EdgeDef {
                target: 1,
                weight: None,
            }],
        });
        let def = doc.node(NodeId::from_index(0)).unwrap();
        assert_eq!(def.edges.len(), 1);
        assert!(doc.node(NodeId::from_index(7)).is_none());
    }

    #[test]
    fn source_view_matches_document() {
        let doc: GraphDoc = serde_yaml::from_str(SAMPLE).unwrap();
        assert_eq!(doc.edge_count(), 1);
        let edges: Vec<_> = doc.out_edges(NodeId::from_index(0)).collect();
        assert_eq!(edges[0].source, NodeId::from_index(0));
        assert_eq!(edges[0].target, NodeId::from_index(1));
        assert_eq!(edges[0].weight, Some(&5.0));
    }
}
