//! Breadth-first traversal over a category's adjacency indices

use super::types::{Direction, TraversalResult};
use crate::graph::{Category, MorphismId, Object, ObjectId};
use std::collections::HashSet;

/// Query for traversing a category from a starting object
#[derive(Debug, Clone)]
pub struct TraverseQuery {
    /// Starting object
    pub origin: ObjectId,
    /// Maximum depth to traverse (0 = origin only, 1 = immediate neighbors, etc.)
    pub max_depth: usize,
    /// Direction to follow morphisms
    pub direction: Direction,
    /// Follow composite morphisms as well as created ones
    pub include_composites: bool,
}

impl TraverseQuery {
    /// Create a new traversal query from a starting object
    pub fn from(origin: ObjectId) -> Self {
        Self {
            origin,
            max_depth: 1,
            direction: Direction::Outgoing,
            include_composites: true,
        }
    }

    pub fn depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Skip composites, walking only directly created morphisms
    pub fn without_composites(mut self) -> Self {
        self.include_composites = false;
        self
    }

    /// Execute the traversal against a category
    pub fn execute(&self, category: &Category) -> TraversalResult {
        let mut result = TraversalResult::new(self.origin);

        if !category.contains_object(&self.origin) {
            return result;
        }

        let mut visited: HashSet<ObjectId> = HashSet::from([self.origin]);
        let mut current_level = vec![self.origin];
        result.levels.push(current_level.clone());

        for _depth in 0..self.max_depth {
            if current_level.is_empty() {
                break;
            }

            let mut next_level = Vec::new();
            for object_id in &current_level {
                let Some(object) = category.object(object_id) else {
                    continue;
                };

                for (neighbor, morphisms) in self.neighbors(object) {
                    if visited.contains(neighbor) {
                        continue;
                    }
                    let Some(via) = self.pick_morphism(category, morphisms) else {
                        continue;
                    };
                    visited.insert(*neighbor);
                    next_level.push(*neighbor);
                    result.morphisms.push(via);
                }
            }

            if !next_level.is_empty() {
                result.levels.push(next_level.clone());
            }
            current_level = next_level;
        }

        result
    }

    fn neighbors<'a>(
        &self,
        object: &'a Object,
    ) -> Vec<(&'a ObjectId, &'a HashSet<MorphismId>)> {
        match self.direction {
            Direction::Outgoing => object.morphisms_to().iter().collect(),
            Direction::Incoming => object.morphisms_from().iter().collect(),
            Direction::Both => object
                .morphisms_to()
                .iter()
                .chain(object.morphisms_from().iter())
                .collect(),
        }
    }

    /// Pick a deterministic morphism out of a bucket, honouring filters
    fn pick_morphism(
        &self,
        category: &Category,
        bucket: &HashSet<MorphismId>,
    ) -> Option<MorphismId> {
        bucket
            .iter()
            .filter(|id| {
                self.include_composites
                    || category.morphism(id).is_some_and(|m| !m.is_composite())
            })
            .min()
            .copied()
    }
}
