//! Query types and result structures

use crate::graph::{MorphismId, ObjectId};

/// Direction for morphism traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Follow morphisms from domain to codomain
    #[default]
    Outgoing,
    /// Follow morphisms backwards, codomain to domain
    Incoming,
    /// Follow morphisms either way
    Both,
}

/// Result of a traversal query
#[derive(Debug, Clone)]
pub struct TraversalResult {
    /// Starting object
    pub origin: ObjectId,
    /// Objects discovered at each depth level
    /// Level 0 = origin, Level 1 = immediate neighbors, etc.
    pub levels: Vec<Vec<ObjectId>>,
    /// Morphisms that first reached each discovered object
    pub morphisms: Vec<MorphismId>,
}

impl TraversalResult {
    pub fn new(origin: ObjectId) -> Self {
        Self {
            origin,
            levels: Vec::new(),
            morphisms: Vec::new(),
        }
    }

    /// All discovered objects, excluding the origin
    pub fn all_objects(&self) -> Vec<&ObjectId> {
        self.levels.iter().skip(1).flatten().collect()
    }

    /// Objects at a specific depth
    pub fn at_depth(&self, depth: usize) -> &[ObjectId] {
        self.levels.get(depth).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// The maximum depth reached
    pub fn max_depth(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }
}

/// Result of a path query
#[derive(Debug, Clone)]
pub struct PathResult {
    /// Whether a path was found
    pub found: bool,
    /// Objects along the path, source to target inclusive
    pub objects: Vec<ObjectId>,
    /// Morphisms along the path, composable in order
    pub morphisms: Vec<MorphismId>,
}

impl PathResult {
    pub fn not_found() -> Self {
        Self {
            found: false,
            objects: Vec::new(),
            morphisms: Vec::new(),
        }
    }

    pub fn found(objects: Vec<ObjectId>, morphisms: Vec<MorphismId>) -> Self {
        Self {
            found: true,
            objects,
            morphisms,
        }
    }

    /// Number of morphisms along the path
    pub fn length(&self) -> usize {
        self.morphisms.len()
    }
}
