//! Core category data structures

mod adjacency;
mod category;
mod engine;
mod error;
mod morphism;
mod object;
mod snapshot;


pub use adjacency::EntityGraph;
pub use category::{Category, CategoryId, CategoryMetadata};
pub use engine::CategoryEngine;
pub use error::{CategoryError, CategoryResult, EntityKind};
pub use morphism::{Morphism, MorphismId, MorphismOrigin};
pub use object::{Adjacency, Object, ObjectId};
pub use snapshot::{CategorySnapshot, MorphismSnapshot, ObjectSnapshot};
