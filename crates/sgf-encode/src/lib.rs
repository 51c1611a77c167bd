//! sgf-encode: Simple Graph Format encoder.
//!
//! Turns any [`GraphSource`] into SGF text, checking along the way that node
//! ids are zero-indexed and contiguous and that every edge leaves the node it
//! is listed under.
//!
//! ```
//! use sgf_graph::GraphBuilder;
//!
//! let mut builder = GraphBuilder::<f64>::undirected("t");
//! let (a, b) = builder.add_nodes(2);
//! builder.add_weighted_edge(a, b, 5.0);
//! let graph = builder.build().unwrap();
//!
//! let lines = sgf_encode::encode(&graph).unwrap();
//! assert_eq!(
//!     lines,
//!     ["# Simple Graph Format", "# name: t", "u 2 1", "0|1:5", "1|"]
//! );
//! ```

pub mod encoder;
pub mod error;
pub mod format;
pub mod options;

pub use encoder::{EncodeSummary, SgfEncoder, encode, encode_to_string};
pub use error::{EncodeError, EncodeResult};
pub use format::{Direction, EdgeToken};
pub use options::EncodeOptions;

pub use sgf_graph::GraphSource;
