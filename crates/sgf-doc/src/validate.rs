//! Document validation logic.

use std::collections::HashSet;

use crate::schema::GraphDoc;

/// Problems a document can have before it ever reaches the encoder.
///
/// Id contiguity is not checked here: documents with gaps or out-of-order
/// ids load fine and are rejected by the encoder with a precise error.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing reference: node {node} has an edge to undeclared node {target}")]
    MissingReference { node: u32, target: u32 },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub fn validate_doc(doc: &GraphDoc) -> Result<(), ValidationError> {
    let declared: HashSet<u32> = doc.nodes.iter().map(|n| n.id).collect();

    for node in &doc.nodes {
        for (i, edge) in node.edges.iter().enumerate() {
            if !declared.contains(&edge.target) {
                return Err(ValidationError::MissingReference {
                    node: node.id,
                    target: edge.target,
                });
            }
            if let Some(w) = edge.weight {
                if sgf_core::ensure_finite(w, "edge weight").is_err() {
                    return Err(ValidationError::InvalidValue {
                        field: format!("nodes[{}].edges[{}].weight", node.id, i),
                        value: w.to_string(),
                        reason: "weight must be finite".to_string(),
                    });
                }
            }
        }
    }

    Ok(())
}
