//! sgf-core: foundation types for the Simple Graph Format workspace.
//!
//! Contains:
//! - ids (compact node identifiers)
//! - numeric (weight checks)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

pub use error::{SgfError, SgfResult};
pub use ids::*;
pub use numeric::*;
