//! Encoder error types.

use sgf_core::NodeId;

pub type EncodeResult<T> = Result<T, EncodeError>;

/// Reasons an encoding is aborted. None of them are recoverable by the
/// encoder; the caller gets the first violation found.
#[derive(thiserror::Error, Debug)]
pub enum EncodeError {
    #[error("Invalid graph name {name:?}: names must fit on the `# name:` line")]
    InvalidName { name: String },

    #[error("Non-consecutive node ids: expected node {expected}, found {found}")]
    NonConsecutiveNode { expected: usize, found: NodeId },

    #[error(
        "Non-consecutive node ids: graph declares {declared} nodes but iteration visited {visited}"
    )]
    NodeCountMismatch { declared: usize, visited: usize },

    #[error(
        "Invalid edge source: edge {edge_source}->{edge_target} reported while iterating node {node}"
    )]
    InvalidEdgeSource {
        node: NodeId,
        edge_source: NodeId,
        edge_target: NodeId,
    },

    #[error("Edge count mismatch: graph declares {declared} edges but {counted} were emitted")]
    EdgeCountMismatch { declared: usize, counted: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EncodeError {
    /// True for both flavors of node id contiguity failure.
    pub fn is_contiguity_violation(&self) -> bool {
        matches!(
            self,
            EncodeError::NonConsecutiveNode { .. } | EncodeError::NodeCountMismatch { .. }
        )
    }

    pub fn is_edge_source_violation(&self) -> bool {
        matches!(self, EncodeError::InvalidEdgeSource { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contiguity_grouping() {
        let gap = EncodeError::NonConsecutiveNode {
            expected: 2,
            found: NodeId::from_index(3),
        };
        let short = EncodeError::NodeCountMismatch {
            declared: 4,
            visited: 3,
        };
        assert!(gap.is_contiguity_violation());
        assert!(short.is_contiguity_violation());
        assert!(!gap.is_edge_source_violation());
    }

    #[test]
    fn invalid_name_is_quoted() {
        let err = EncodeError::InvalidName {
            name: "a\nb".to_string(),
        };
        assert!(err.to_string().contains(r#""a\nb""#));
        assert!(!err.is_contiguity_violation());
    }

    #[test]
    fn messages_carry_context() {
        let err = EncodeError::InvalidEdgeSource {
            node: NodeId::from_index(0),
            edge_source: NodeId::from_index(1),
            edge_target: NodeId::from_index(2),
        };
        assert_eq!(
            err.to_string(),
            "Invalid edge source: edge 1->2 reported while iterating node 0"
        );
        assert!(err.is_edge_source_violation());
    }
}
