//! EntityGraph: structural bookkeeping for objects, morphisms and their indices

use super::error::{CategoryError, CategoryResult};
use super::morphism::{Morphism, MorphismId};
use super::object::{Object, ObjectId};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Objects, morphisms and the dual adjacency indices relating them
///
/// Owns no policy. Typing and naming are checked by the category before
/// anything reaches this layer. Both maps iterate in insertion order and
/// never shrink.
#[derive(Debug, Default)]
pub struct EntityGraph {
    objects: IndexMap<ObjectId, Object>,
    morphisms: IndexMap<MorphismId, Morphism>,
}

impl EntityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fresh object together with its identity morphism
    ///
    /// The identity is registered before this returns, so no caller ever
    /// sees an object without one.
    pub(crate) fn insert_object(
        &mut self,
        id: ObjectId,
        label: Option<String>,
        identity_label: Option<String>,
    ) -> CategoryResult<ObjectId> {
        let identity = Morphism::identity(MorphismId::new(id.category()), id, identity_label);
        self.objects.insert(id, Object::new(id, identity.id(), label));
        self.register_edge(identity)?;
        Ok(id)
    }

    /// Register a morphism in both adjacency indices and the morphism set
    ///
    /// This is the only writer of `morphisms_to` / `morphisms_from`. Both
    /// endpoints are checked first; on failure nothing is touched.
    pub(crate) fn register_edge(&mut self, morphism: Morphism) -> CategoryResult<MorphismId> {
        let (source, target, id) = (morphism.domain(), morphism.codomain(), morphism.id());
        for endpoint in [source, target] {
            if !self.objects.contains_key(&endpoint) {
                return Err(CategoryError::ObjectNotFound(endpoint));
            }
        }

        if let Some(object) = self.objects.get_mut(&source) {
            object.link_outgoing(target, id);
        }
        if let Some(object) = self.objects.get_mut(&target) {
            object.link_incoming(source, id);
        }
        self.morphisms.insert(id, morphism);
        Ok(id)
    }

    /// Morphisms with exactly this source and target
    ///
    /// Returns an owned copy of the bucket; an absent pair yields an empty
    /// set and is not materialised.
    pub fn edges_from(&self, source: &ObjectId, target: &ObjectId) -> HashSet<MorphismId> {
        self.objects
            .get(source)
            .and_then(|object| object.morphisms_to().get(target))
            .cloned()
            .unwrap_or_default()
    }

    /// The same bucket read from the target's side
    pub fn edges_into(&self, target: &ObjectId, source: &ObjectId) -> HashSet<MorphismId> {
        self.objects
            .get(target)
            .and_then(|object| object.morphisms_from().get(source))
            .cloned()
            .unwrap_or_default()
    }

    pub fn object(&self, id: &ObjectId) -> Option<&Object> {
        self.objects.get(id)
    }

    pub fn morphism(&self, id: &MorphismId) -> Option<&Morphism> {
        self.morphisms.get(id)
    }

    pub fn contains_object(&self, id: &ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    pub fn contains_morphism(&self, id: &MorphismId) -> bool {
        self.morphisms.contains_key(id)
    }

    /// All objects, in creation order
    pub fn objects(&self) -> impl Iterator<Item = &Object> {
        self.objects.values()
    }

    /// All morphisms, identities included, in creation order
    pub fn morphisms(&self) -> impl Iterator<Item = &Morphism> {
        self.morphisms.values()
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn morphism_count(&self) -> usize {
        self.morphisms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CategoryId;

    fn graph_with(n: usize) -> (CategoryId, EntityGraph, Vec<ObjectId>) {
        let category = CategoryId::new();
        let mut graph = EntityGraph::new();
        let ids = (0..n)
            .map(|_| graph.insert_object(ObjectId::new(category), None, None).unwrap())
            .collect();
        (category, graph, ids)
    }

    #[test]
    fn insert_object_wires_identity() {
        let (_, graph, ids) = graph_with(1);
        let object = graph.object(&ids[0]).unwrap();
        let identity = graph.morphism(&object.identity()).unwrap();

        assert!(identity.is_identity());
        assert_eq!(graph.object_count(), 1);
        assert_eq!(graph.morphism_count(), 1);
        assert!(graph.edges_from(&ids[0], &ids[0]).contains(&identity.id()));
        assert!(graph.edges_into(&ids[0], &ids[0]).contains(&identity.id()));
    }

    #[test]
    fn register_edge_updates_both_sides() {
        let (category, mut graph, ids) = graph_with(2);
        let (a, b) = (ids[0], ids[1]);
        let m = graph
            .register_edge(Morphism::created(MorphismId::new(category), a, b, None))
            .unwrap();

        assert_eq!(graph.edges_from(&a, &b), HashSet::from([m]));
        assert_eq!(graph.edges_into(&b, &a), HashSet::from([m]));
        assert!(graph.edges_from(&b, &a).is_empty());
        assert!(!graph.edges_from(&a, &a).contains(&m));
    }

    #[test]
    fn register_edge_with_unknown_endpoint_changes_nothing() {
        let (category, mut graph, ids) = graph_with(1);
        let stranger = ObjectId::new(category);
        let result =
            graph.register_edge(Morphism::created(MorphismId::new(category), ids[0], stranger, None));

        assert!(matches!(result, Err(CategoryError::ObjectNotFound(id)) if id == stranger));
        assert_eq!(graph.morphism_count(), 1);
        assert_eq!(graph.object(&ids[0]).unwrap().out_degree(), 1);
    }

    #[test]
    fn edges_from_returns_independent_copies() {
        let (category, mut graph, ids) = graph_with(2);
        let (a, b) = (ids[0], ids[1]);
        graph
            .register_edge(Morphism::created(MorphismId::new(category), a, b, None))
            .unwrap();

        let mut copy = graph.edges_from(&a, &b);
        copy.clear();
        assert_eq!(graph.edges_from(&a, &b).len(), 1);
    }

    #[test]
    fn reading_an_empty_bucket_does_not_create_it() {
        let (_, graph, ids) = graph_with(2);
        assert!(graph.edges_from(&ids[0], &ids[1]).is_empty());
        assert!(graph.object(&ids[0]).unwrap().morphisms_to().get(&ids[1]).is_none());
    }
}
