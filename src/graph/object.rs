//! Object representation: a node of the category and its adjacency indices

use super::category::CategoryId;
use super::morphism::MorphismId;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Unique identifier for an object
///
/// Carries the id of the owning category, so membership can be checked
/// from the handle alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId {
    category: CategoryId,
    key: Uuid,
}

impl ObjectId {
    /// Create a new random ObjectId inside the given category
    pub(crate) fn new(category: CategoryId) -> Self {
        Self {
            category,
            key: Uuid::new_v4(),
        }
    }

    /// The category this object belongs to
    pub fn category(&self) -> CategoryId {
        self.category
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = self.key.simple().to_string();
        write!(f, "obj:{}", &key[..8])
    }
}

/// Morphism buckets keyed by the object at the other end
pub type Adjacency = HashMap<ObjectId, HashSet<MorphismId>>;

/// An object in a category
///
/// The two indices are dual views of the same edge set: a morphism
/// `m: X -> Y` sits in `X.morphisms_to[Y]` and `Y.morphisms_from[X]` and
/// nowhere else. Only [`EntityGraph::register_edge`](super::EntityGraph::register_edge)
/// writes to them.
#[derive(Debug, Clone)]
pub struct Object {
    id: ObjectId,
    identity: MorphismId,
    label: Option<String>,
    morphisms_to: Adjacency,
    morphisms_from: Adjacency,
}

impl Object {
    pub(super) fn new(id: ObjectId, identity: MorphismId, label: Option<String>) -> Self {
        Self {
            id,
            identity,
            label,
            morphisms_to: HashMap::new(),
            morphisms_from: HashMap::new(),
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn category(&self) -> CategoryId {
        self.id.category()
    }

    /// The identity morphism created together with this object
    pub fn identity(&self) -> MorphismId {
        self.identity
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Outgoing morphisms, keyed by codomain
    pub fn morphisms_to(&self) -> &Adjacency {
        &self.morphisms_to
    }

    /// Incoming morphisms, keyed by domain
    pub fn morphisms_from(&self) -> &Adjacency {
        &self.morphisms_from
    }

    /// Objects reachable through a single outgoing morphism
    pub fn successors(&self) -> impl Iterator<Item = &ObjectId> {
        self.morphisms_to.keys()
    }

    /// Objects with a morphism into this one
    pub fn predecessors(&self) -> impl Iterator<Item = &ObjectId> {
        self.morphisms_from.keys()
    }

    /// Number of outgoing morphisms, identity included
    pub fn out_degree(&self) -> usize {
        self.morphisms_to.values().map(HashSet::len).sum()
    }

    /// Number of incoming morphisms, identity included
    pub fn in_degree(&self) -> usize {
        self.morphisms_from.values().map(HashSet::len).sum()
    }

    pub(super) fn link_outgoing(&mut self, target: ObjectId, morphism: MorphismId) {
        self.morphisms_to.entry(target).or_default().insert(morphism);
    }

    pub(super) fn link_incoming(&mut self, source: ObjectId, morphism: MorphismId) {
        self.morphisms_from.entry(source).or_default().insert(morphism);
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Object {}

impl std::hash::Hash for Object {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_id_carries_its_category() {
        let category = CategoryId::new();
        let id = ObjectId::new(category);
        assert_eq!(id.category(), category);
        assert_ne!(id, ObjectId::new(category));
    }

    #[test]
    fn object_id_display_is_short() {
        let id = ObjectId::new(CategoryId::new());
        let shown = id.to_string();
        assert!(shown.starts_with("obj:"));
        assert_eq!(shown.len(), "obj:".len() + 8);
    }

    #[test]
    fn links_are_grouped_by_other_endpoint() {
        let category = CategoryId::new();
        let (a, b) = (ObjectId::new(category), ObjectId::new(category));
        let identity = MorphismId::new(category);
        let mut object = Object::new(a, identity, Some("A0".to_string()));

        let m1 = MorphismId::new(category);
        let m2 = MorphismId::new(category);
        object.link_outgoing(b, m1);
        object.link_outgoing(b, m2);

        assert_eq!(object.morphisms_to()[&b].len(), 2);
        assert_eq!(object.out_degree(), 2);
        assert_eq!(object.in_degree(), 0);
        assert!(object.morphisms_from().get(&b).is_none());
        assert_eq!(object.label(), Some("A0"));
    }
}
