//! Encoder configuration.

use serde::{Deserialize, Serialize};

/// Knobs for [`SgfEncoder`](crate::SgfEncoder).
///
/// The declared edge total is written to the header as reported by the
/// graph. With `check_edge_count` the encoder also tallies emitted edge
/// tokens and fails if the tally disagrees with the declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    pub check_edge_count: bool,
}

impl EncodeOptions {
    pub fn with_edge_count_check(mut self, enabled: bool) -> Self {
        self.check_edge_count = enabled;
        self
    }
}
