//! Category: the namespace that owns objects and morphisms and composes them

use super::adjacency::EntityGraph;
use super::error::{CategoryError, CategoryResult};
use super::morphism::{Morphism, MorphismId};
use super::object::{Object, ObjectId};
use super::snapshot::{CategorySnapshot, MorphismSnapshot, ObjectSnapshot};
use crate::config::CategoryConfig;
use crate::naming::{LabelProvider, NamingStrategy};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;
use uuid::Uuid;

/// Unique identifier for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(Uuid);

impl CategoryId {
    /// Create a new random CategoryId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata about a category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryMetadata {
    /// When the category was created
    pub created_at: Option<DateTime<Utc>>,
    /// When an object or morphism was last added
    pub updated_at: Option<DateTime<Utc>>,
}

/// A category: a closed set of objects and morphisms with consistent typing
///
/// The only factory for objects and morphisms. Every mutating call checks
/// membership and composability before it asks the naming strategy for a
/// label or touches the graph, so a failed call leaves no trace.
#[derive(Debug)]
pub struct Category {
    id: CategoryId,
    name: String,
    strategy: NamingStrategy,
    naming: Box<dyn LabelProvider>,
    graph: EntityGraph,
    metadata: CategoryMetadata,
}

impl Category {
    /// Create an empty category with the given name and naming strategy
    pub fn new(name: impl Into<String>, strategy: NamingStrategy) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            strategy,
            naming: strategy.provider(),
            graph: EntityGraph::new(),
            metadata: CategoryMetadata {
                created_at: Some(Utc::now()),
                ..Default::default()
            },
        }
    }

    pub fn from_config(config: CategoryConfig) -> Self {
        Self::new(config.name, config.naming)
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The naming strategy fixed at construction
    pub fn naming(&self) -> NamingStrategy {
        self.strategy
    }

    pub fn metadata(&self) -> &CategoryMetadata {
        &self.metadata
    }

    // --- Factory ---

    /// Create a new object together with its identity morphism
    pub fn create_object(&mut self) -> CategoryResult<ObjectId> {
        self.new_object(None)
    }

    /// Create a new object, offering a label to the naming strategy
    pub fn create_labeled_object(&mut self, label: impl Into<String>) -> CategoryResult<ObjectId> {
        self.new_object(Some(label.into()))
    }

    /// Create a morphism from `source` to `target`
    ///
    /// Both endpoints must belong to this category.
    pub fn create_morphism(
        &mut self,
        source: ObjectId,
        target: ObjectId,
    ) -> CategoryResult<MorphismId> {
        self.new_morphism(source, target, None)
    }

    pub fn create_labeled_morphism(
        &mut self,
        source: ObjectId,
        target: ObjectId,
        label: impl Into<String>,
    ) -> CategoryResult<MorphismId> {
        self.new_morphism(source, target, Some(label.into()))
    }

    /// Compose `first` then `second` into a new morphism
    ///
    /// Requires `first.codomain == second.domain`. The result always is a
    /// freshly registered morphism, even when either operand is an
    /// identity.
    pub fn compose(
        &mut self,
        first: MorphismId,
        second: MorphismId,
    ) -> CategoryResult<MorphismId> {
        self.new_composite(first, second, None)
    }

    pub fn compose_labeled(
        &mut self,
        first: MorphismId,
        second: MorphismId,
        label: impl Into<String>,
    ) -> CategoryResult<MorphismId> {
        self.new_composite(first, second, Some(label.into()))
    }

    /// Compose a chain of morphisms left to right
    ///
    /// The whole chain is checked before anything is registered. A single
    /// morphism is returned as is; every intermediate composite of a
    /// longer chain is registered like any other composition.
    pub fn compose_path(&mut self, path: &[MorphismId]) -> CategoryResult<MorphismId> {
        let (head, rest) = path.split_first().ok_or(CategoryError::EmptyPath)?;

        let mut previous = self.member_morphism(*head)?;
        for id in rest {
            let next = self.member_morphism(*id)?;
            ensure_composable(previous, next)?;
            previous = next;
        }

        let mut result = *head;
        for id in rest {
            result = self.compose(result, *id)?;
        }
        Ok(result)
    }

    // --- Read ---

    pub fn object(&self, id: &ObjectId) -> Option<&Object> {
        self.graph.object(id)
    }

    pub fn morphism(&self, id: &MorphismId) -> Option<&Morphism> {
        self.graph.morphism(id)
    }

    /// All objects, in creation order
    pub fn objects(&self) -> impl Iterator<Item = &Object> {
        self.graph.objects()
    }

    /// All morphisms, identities included, in creation order
    pub fn morphisms(&self) -> impl Iterator<Item = &Morphism> {
        self.graph.morphisms()
    }

    pub fn identity_of(&self, object: &ObjectId) -> Option<MorphismId> {
        self.graph.object(object).map(Object::identity)
    }

    /// The hom-set: every morphism from `source` to `target`
    pub fn hom(&self, source: &ObjectId, target: &ObjectId) -> HashSet<MorphismId> {
        self.graph.edges_from(source, target)
    }

    /// Read-only access to the underlying entity graph
    pub fn graph(&self) -> &EntityGraph {
        &self.graph
    }

    pub fn contains_object(&self, id: &ObjectId) -> bool {
        self.graph.contains_object(id)
    }

    pub fn contains_morphism(&self, id: &MorphismId) -> bool {
        self.graph.contains_morphism(id)
    }

    pub fn object_count(&self) -> usize {
        self.graph.object_count()
    }

    pub fn morphism_count(&self) -> usize {
        self.graph.morphism_count()
    }

    // --- Display ---

    /// Label of an object, or its short id when unlabeled
    pub fn display_object(&self, id: &ObjectId) -> String {
        self.graph
            .object(id)
            .and_then(Object::label)
            .map(str::to_owned)
            .unwrap_or_else(|| id.to_string())
    }

    /// Label of a morphism, or its short id when unlabeled
    pub fn display_morphism(&self, id: &MorphismId) -> String {
        self.graph
            .morphism(id)
            .and_then(Morphism::label)
            .map(str::to_owned)
            .unwrap_or_else(|| id.to_string())
    }

    /// `"<morphism>: <domain> -> <codomain>"`
    pub fn describe_morphism(&self, id: &MorphismId) -> Option<String> {
        let morphism = self.graph.morphism(id)?;
        Some(format!(
            "{}: {} -> {}",
            self.display_morphism(id),
            self.display_object(&morphism.domain()),
            self.display_object(&morphism.codomain())
        ))
    }

    /// Serializable view of the whole category
    pub fn snapshot(&self) -> CategorySnapshot {
        CategorySnapshot {
            id: self.id,
            name: self.name.clone(),
            naming: self.strategy,
            metadata: self.metadata.clone(),
            objects: self
                .objects()
                .map(|object| ObjectSnapshot {
                    id: object.id(),
                    label: object.label().map(str::to_owned),
                    identity: object.identity(),
                })
                .collect(),
            morphisms: self
                .morphisms()
                .map(|morphism| MorphismSnapshot {
                    id: morphism.id(),
                    label: morphism.label().map(str::to_owned),
                    domain: morphism.domain(),
                    codomain: morphism.codomain(),
                    origin: morphism.origin(),
                })
                .collect(),
        }
    }

    /// Pretty JSON rendering of [`Category::snapshot`], for debugging
    pub fn to_json(&self) -> CategoryResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    // --- Internals ---

    fn new_object(&mut self, requested: Option<String>) -> CategoryResult<ObjectId> {
        let label = self.naming.object_label(&self.name, requested)?;
        let identity_label = self.naming.identity_label(&self.name, label.as_deref());
        let id = self
            .graph
            .insert_object(ObjectId::new(self.id), label, identity_label)?;
        self.touch();
        debug!(
            category = %self.name,
            object = %self.display_object(&id),
            "created object"
        );
        Ok(id)
    }

    fn new_morphism(
        &mut self,
        source: ObjectId,
        target: ObjectId,
        requested: Option<String>,
    ) -> CategoryResult<MorphismId> {
        if source.category() != target.category() {
            return Err(CategoryError::CategoryMismatch {
                expected: source.category(),
                found: target.category(),
            });
        }
        self.check_object(source)?;
        self.check_object(target)?;

        let label = self.naming.morphism_label(&self.name, requested)?;
        let morphism = Morphism::created(MorphismId::new(self.id), source, target, label);
        self.register(morphism)
    }

    fn new_composite(
        &mut self,
        first: MorphismId,
        second: MorphismId,
        requested: Option<String>,
    ) -> CategoryResult<MorphismId> {
        let f = self.member_morphism(first)?.clone();
        let g = self.member_morphism(second)?.clone();
        ensure_composable(&f, &g)?;

        let label = self
            .naming
            .composite_label(&self.name, f.label(), g.label(), requested)?;
        let composite = Morphism::composite(MorphismId::new(self.id), &f, &g, label);
        self.register(composite)
    }

    fn register(&mut self, morphism: Morphism) -> CategoryResult<MorphismId> {
        let id = self.graph.register_edge(morphism)?;
        self.touch();
        debug!(
            category = %self.name,
            morphism = %self.describe_morphism(&id).unwrap_or_default(),
            "registered morphism"
        );
        Ok(id)
    }

    fn check_object(&self, id: ObjectId) -> CategoryResult<()> {
        if id.category() != self.id {
            return Err(CategoryError::CategoryMismatch {
                expected: self.id,
                found: id.category(),
            });
        }
        if !self.graph.contains_object(&id) {
            return Err(CategoryError::ObjectNotFound(id));
        }
        Ok(())
    }

    fn member_morphism(&self, id: MorphismId) -> CategoryResult<&Morphism> {
        if id.category() != self.id {
            return Err(CategoryError::CategoryMismatch {
                expected: self.id,
                found: id.category(),
            });
        }
        self.graph
            .morphism(&id)
            .ok_or(CategoryError::MorphismNotFound(id))
    }

    /// Update the last modified timestamp
    fn touch(&mut self) {
        self.metadata.updated_at = Some(Utc::now());
    }
}

fn ensure_composable(first: &Morphism, second: &Morphism) -> CategoryResult<()> {
    if first.composable_with(second) {
        Ok(())
    } else {
        Err(CategoryError::CompositionDomainMismatch {
            first: first.id(),
            second: second.id(),
            codomain: first.codomain(),
            domain: second.domain(),
        })
    }
}
