//! The SGF encoder.

use std::io;

use sgf_core::NodeId;
use sgf_graph::GraphSource;

use crate::error::{EncodeError, EncodeResult};
use crate::format::{self, BodyLine, Direction, EdgeToken};
use crate::options::EncodeOptions;

/// Totals observed during a successful encoding pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSummary {
    pub nodes: usize,
    pub edges: usize,
}

/// Serializes graphs to SGF.
///
/// A single pass over the graph both writes the body lines and checks the
/// structure: node ids must come out as `0, 1, .., n - 1` and every edge must
/// leave the node it is listed under. The header uses the graph's declared
/// totals. The first violation aborts the pass; no body line is produced for
/// the offending node or any node after it.
#[derive(Debug, Clone, Default)]
pub struct SgfEncoder {
    options: EncodeOptions,
}

impl SgfEncoder {
    pub fn new(options: EncodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Encode into a vector of lines (no line terminators).
    pub fn encode<G: GraphSource>(&self, graph: &G) -> EncodeResult<Vec<String>> {
        let mut lines = Vec::new();
        self.emit(graph, |line| {
            lines.push(line);
            Ok(())
        })?;
        Ok(lines)
    }

    /// Encode into one string, every line terminated by `\n`.
    pub fn encode_to_string<G: GraphSource>(&self, graph: &G) -> EncodeResult<String> {
        let mut out = String::new();
        self.emit(graph, |line| {
            out.push_str(&line);
            out.push('\n');
            Ok(())
        })?;
        Ok(out)
    }

    /// Stream lines to `out` as they are produced.
    ///
    /// Lines written before a violation is detected stay written.
    pub fn write_to<G: GraphSource, W: io::Write>(
        &self,
        graph: &G,
        out: &mut W,
    ) -> EncodeResult<EncodeSummary> {
        self.emit(graph, |line| {
            writeln!(out, "{line}")?;
            Ok(())
        })
    }

    fn emit<G, F>(&self, graph: &G, mut sink: F) -> EncodeResult<EncodeSummary>
    where
        G: GraphSource,
        F: FnMut(String) -> EncodeResult<()>,
    {
        let declared_nodes = graph.node_count();
        let declared_edges = graph.edge_count();
        tracing::debug!(
            name = graph.name(),
            directed = graph.is_directed(),
            nodes = declared_nodes,
            edges = declared_edges,
            "encoding SGF"
        );

        if !format::is_single_line(graph.name()) {
            tracing::warn!(name = graph.name(), "graph name spans several lines");
            return Err(EncodeError::InvalidName {
                name: graph.name().to_string(),
            });
        }

        sink(format::FORMAT_COMMENT.to_string())?;
        sink(format::name_line(graph.name()))?;
        sink(format::header_line(
            Direction::from_directed(graph.is_directed()),
            declared_nodes,
            declared_edges,
        ))?;

        let mut visited = 0usize;
        let mut emitted_edges = 0usize;
        for node in graph.node_ids() {
            if node.as_usize() != visited {
                tracing::warn!(expected = visited, found = %node, "node ids are not consecutive");
                return Err(EncodeError::NonConsecutiveNode {
                    expected: visited,
                    found: node,
                });
            }
            visited += 1;

            let line = Self::body_line(graph, node)?;
            emitted_edges += line.edge_count();
            sink(line.finish())?;
        }

        if visited != declared_nodes {
            tracing::warn!(
                declared = declared_nodes,
                visited,
                "node count does not match iteration"
            );
            return Err(EncodeError::NodeCountMismatch {
                declared: declared_nodes,
                visited,
            });
        }

        if self.options.check_edge_count && emitted_edges != declared_edges {
            tracing::warn!(
                declared = declared_edges,
                counted = emitted_edges,
                "edge count does not match iteration"
            );
            return Err(EncodeError::EdgeCountMismatch {
                declared: declared_edges,
                counted: emitted_edges,
            });
        }

        tracing::debug!(nodes = visited, edges = emitted_edges, "SGF encoding complete");
        Ok(EncodeSummary {
            nodes: visited,
            edges: emitted_edges,
        })
    }

    fn body_line<G: GraphSource>(graph: &G, node: NodeId) -> EncodeResult<BodyLine> {
        let mut line = BodyLine::new(node);
        for edge in graph.out_edges(node) {
            if edge.source != node {
                tracing::warn!(node = %node, source = %edge.source, "edge listed under wrong node");
                return Err(EncodeError::InvalidEdgeSource {
                    node,
                    edge_source: edge.source,
                    edge_target: edge.target,
                });
            }
            line.push(EdgeToken {
                target: edge.target,
                weight: edge.weight,
            });
        }
        Ok(line)
    }
}

/// Encode with default options.
pub fn encode<G: GraphSource>(graph: &G) -> EncodeResult<Vec<String>> {
    SgfEncoder::default().encode(graph)
}

/// Encode with default options into a newline-terminated string.
pub fn encode_to_string<G: GraphSource>(graph: &G) -> EncodeResult<String> {
    SgfEncoder::default().encode_to_string(graph)
}
