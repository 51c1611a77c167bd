//! sgf-graph: graph collaborators for the SGF encoder.
//!
//! Provides:
//! - The `GraphSource` contract every encodable graph satisfies
//! - An immutable adjacency-list graph and its validating builder
//! - A `petgraph` adapter
//!
//! # Example
//!
//! ```
//! use sgf_graph::{GraphBuilder, GraphSource};
//!
//! let mut builder = GraphBuilder::<f64>::directed("demo");
//! let a = builder.add_node();
//! let b = builder.add_node();
//! builder.add_weighted_edge(a, b, 2.5);
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! ```

pub mod adapter;
pub mod builder;
pub mod error;
pub mod graph;
pub mod source;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use adapter::{EdgeWeight, PetgraphSource};
pub use builder::GraphBuilder;
pub use error::GraphError;
pub use graph::{AdjacencyGraph, Edge, EdgeIndex};
pub use source::{EdgeRef, GraphSource, Unweighted};
