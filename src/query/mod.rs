//! Read-only queries over a category
//!
//! Traversals walk the adjacency indices objects already carry; path
//! queries return morphism chains ready for composition.

mod path;
mod traverse;
mod types;

pub use path::PathQuery;
pub use traverse::TraverseQuery;
pub use types::{Direction, PathResult, TraversalResult};
