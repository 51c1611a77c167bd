//! Line-level SGF formatting.

use core::fmt;

use sgf_core::NodeId;

/// First line of every SGF document.
pub const FORMAT_COMMENT: &str = "# Simple Graph Format";

/// Separates a node id from its edge list.
pub const NODE_SEPARATOR: char = '|';

/// Separates edge tokens.
pub const EDGE_SEPARATOR: char = ',';

/// Separates a target id from its weight.
pub const WEIGHT_SEPARATOR: char = ':';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Directed,
    Undirected,
}

impl Direction {
    pub fn from_directed(directed: bool) -> Self {
        if directed {
            Direction::Directed
        } else {
            Direction::Undirected
        }
    }

    pub fn flag(self) -> char {
        match self {
            Direction::Directed => 'd',
            Direction::Undirected => 'u',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flag())
    }
}

/// True if `name` can be written on a single `# name:` line.
pub fn is_single_line(name: &str) -> bool {
    !name.contains(['\n', '\r'])
}

/// `# name: <name>`; the name is written verbatim and must pass
/// [`is_single_line`].
pub fn name_line(name: &str) -> String {
    format!("# name: {name}")
}

/// `<d|u> <node_count> <edge_count>`
pub fn header_line(direction: Direction, node_count: usize, edge_count: usize) -> String {
    format!("{direction} {node_count} {edge_count}")
}

/// One edge in a body line: `target` or `target:weight`.
#[derive(Debug, Clone, Copy)]
pub struct EdgeToken<'a, W> {
    pub target: NodeId,
    pub weight: Option<&'a W>,
}

impl<W: fmt::Display> fmt::Display for EdgeToken<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.weight {
            Some(w) => write!(f, "{}{}{}", self.target, WEIGHT_SEPARATOR, w),
            None => write!(f, "{}", self.target),
        }
    }
}

/// Accumulates one `<node_id>|<edge_list>` line.
#[derive(Debug)]
pub(crate) struct BodyLine {
    line: String,
    edges: usize,
}

impl BodyLine {
    pub(crate) fn new(node: NodeId) -> Self {
        let mut line = node.to_string();
        line.push(NODE_SEPARATOR);
        Self { line, edges: 0 }
    }

    pub(crate) fn push<W: fmt::Display>(&mut self, token: EdgeToken<'_, W>) {
        if self.edges > 0 {
            self.line.push(EDGE_SEPARATOR);
        }
        self.line.push_str(&token.to_string());
        self.edges += 1;
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.edges
    }

    pub(crate) fn finish(self) -> String {
        self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_flags() {
        assert_eq!(Direction::from_directed(true).to_string(), "d");
        assert_eq!(Direction::from_directed(false).to_string(), "u");
    }

    #[test]
    fn header_and_name() {
        assert_eq!(header_line(Direction::Directed, 100, 990), "d 100 990");
        assert_eq!(name_line("gnp_random_graph"), "# name: gnp_random_graph");
        assert_eq!(name_line(""), "# name: ");
        assert!(is_single_line("gnp random graph"));
        assert!(!is_single_line("a\nb"));
        assert!(!is_single_line("a\r"));
    }

    #[test]
    fn token_with_and_without_weight() {
        let w = 0.25_f64;
        let weighted = EdgeToken {
            target: NodeId::from_index(3),
            weight: Some(&w),
        };
        let bare: EdgeToken<'_, f64> = EdgeToken {
            target: NodeId::from_index(3),
            weight: None,
        };
        assert_eq!(weighted.to_string(), "3:0.25");
        assert_eq!(bare.to_string(), "3");
    }

    #[test]
    fn body_line_joins_without_trailing_comma() {
        let mut line = BodyLine::new(NodeId::from_index(4));
        assert_eq!(line.edge_count(), 0);
        let five = 5_i64;
        line.push(EdgeToken {
            target: NodeId::from_index(1),
            weight: Some(&five),
        });
        line.push::<i64>(EdgeToken {
            target: NodeId::from_index(2),
            weight: None,
        });
        assert_eq!(line.edge_count(), 2);
        assert_eq!(line.finish(), "4|1:5,2");

        assert_eq!(BodyLine::new(NodeId::from_index(0)).finish(), "0|");
    }
}
