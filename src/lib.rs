//! catgraph: bookkeeping for abstract categories
//!
//! Models a category as a graph of objects and typed, directed morphisms,
//! keeping identities, composition and membership typing consistent.
//!
//! # Core Concepts
//!
//! - **Objects**: nodes that each own an identity morphism and two dual
//!   adjacency indices (`morphisms_to`, `morphisms_from`)
//! - **Morphisms**: directed relations between objects of one category
//! - **Categories**: the only factory for objects and morphisms, and the
//!   place composition happens
//! - **Naming strategies**: unlabeled, explicit or serial labels, chosen
//!   once per category
//!
//! Laws such as associativity are obligations on callers; nothing here
//! checks them at runtime.
//!
//! # Example
//!
//! ```
//! use catgraph::{Category, NamingStrategy};
//!
//! let mut cat = Category::new("A", NamingStrategy::Serial);
//! let a0 = cat.create_object().unwrap();
//! let a1 = cat.create_object().unwrap();
//! let f = cat.create_morphism(a0, a1).unwrap();
//! let g = cat.create_morphism(a1, a1).unwrap();
//! let gf = cat.compose(f, g).unwrap();
//!
//! assert_eq!(cat.describe_morphism(&gf).unwrap(), "A_mor2: A0 -> A1");
//! ```

mod config;
mod graph;
pub mod naming;
pub mod query;

pub use config::CategoryConfig;
pub use graph::{
    Adjacency, Category, CategoryEngine, CategoryError, CategoryId, CategoryMetadata,
    CategoryResult, CategorySnapshot, EntityGraph, EntityKind, Morphism, MorphismId,
    MorphismOrigin, MorphismSnapshot, Object, ObjectId, ObjectSnapshot,
};
pub use naming::{LabelProvider, NamingStrategy};
pub use query::{Direction, PathQuery, PathResult, TraversalResult, TraverseQuery};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
