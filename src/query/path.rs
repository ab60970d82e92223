//! Shortest composable paths between objects

use super::types::PathResult;
use crate::graph::{Category, MorphismId, ObjectId};
use std::collections::{HashMap, HashSet, VecDeque};

/// Query for a chain of morphisms leading from one object to another
///
/// Paths always follow morphisms forwards, so the result can be handed
/// straight to [`Category::compose_path`].
#[derive(Debug, Clone)]
pub struct PathQuery {
    /// Source object
    pub source: ObjectId,
    /// Target object
    pub target: ObjectId,
    /// Maximum number of morphisms in the path
    pub max_length: usize,
}

impl PathQuery {
    /// Create a new path query between two objects
    pub fn between(source: ObjectId, target: ObjectId) -> Self {
        Self {
            source,
            target,
            max_length: 10, // Default max
        }
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Execute the path query (BFS for shortest path)
    ///
    /// A path from an object to itself is its identity.
    pub fn execute(&self, category: &Category) -> PathResult {
        let (Some(_), Some(_)) = (category.object(&self.source), category.object(&self.target))
        else {
            return PathResult::not_found();
        };

        if self.source == self.target {
            return match category.identity_of(&self.source) {
                Some(identity) => PathResult::found(vec![self.source], vec![identity]),
                None => PathResult::not_found(),
            };
        }

        let mut visited: HashSet<ObjectId> = HashSet::from([self.source]);
        let mut queue: VecDeque<(ObjectId, usize)> = VecDeque::from([(self.source, 0)]);
        let mut predecessors: HashMap<ObjectId, (ObjectId, MorphismId)> = HashMap::new();

        while let Some((current, depth)) = queue.pop_front() {
            if depth >= self.max_length {
                continue;
            }
            let Some(object) = category.object(&current) else {
                continue;
            };

            for (neighbor, bucket) in object.morphisms_to() {
                if visited.contains(neighbor) {
                    continue;
                }
                let Some(via) = bucket.iter().min().copied() else {
                    continue;
                };
                visited.insert(*neighbor);
                predecessors.insert(*neighbor, (current, via));

                if *neighbor == self.target {
                    return self.reconstruct_path(&predecessors);
                }
                queue.push_back((*neighbor, depth + 1));
            }
        }

        PathResult::not_found()
    }

    /// Walk predecessors back from the target
    fn reconstruct_path(&self, predecessors: &HashMap<ObjectId, (ObjectId, MorphismId)>) -> PathResult {
        let mut objects = vec![self.target];
        let mut morphisms = Vec::new();

        let mut current = self.target;
        while let Some((previous, via)) = predecessors.get(&current) {
            morphisms.push(*via);
            objects.push(*previous);
            current = *previous;
        }

        objects.reverse();
        morphisms.reverse();
        PathResult::found(objects, morphisms)
    }
}
