//! Morphism representation: a typed, directed relation between two objects

use super::category::CategoryId;
use super::object::ObjectId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a morphism
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MorphismId {
    category: CategoryId,
    key: Uuid,
}

impl MorphismId {
    /// Create a new random MorphismId inside the given category
    pub(crate) fn new(category: CategoryId) -> Self {
        Self {
            category,
            key: Uuid::new_v4(),
        }
    }

    /// The category this morphism belongs to
    pub fn category(&self) -> CategoryId {
        self.category
    }
}

impl std::fmt::Display for MorphismId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = self.key.simple().to_string();
        write!(f, "mor:{}", &key[..8])
    }
}

/// How a morphism came into existence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MorphismOrigin {
    /// Created together with its object
    Identity,
    /// Requested directly through the category factory
    Created,
    /// Produced by composing `first` then `second`
    Composite {
        first: MorphismId,
        second: MorphismId,
    },
}

/// A morphism in a category
///
/// Source, target and origin are fixed at construction.
#[derive(Debug, Clone)]
pub struct Morphism {
    id: MorphismId,
    domain: ObjectId,
    codomain: ObjectId,
    origin: MorphismOrigin,
    label: Option<String>,
}

impl Morphism {
    pub(super) fn identity(id: MorphismId, object: ObjectId, label: Option<String>) -> Self {
        Self {
            id,
            domain: object,
            codomain: object,
            origin: MorphismOrigin::Identity,
            label,
        }
    }

    pub(super) fn created(
        id: MorphismId,
        domain: ObjectId,
        codomain: ObjectId,
        label: Option<String>,
    ) -> Self {
        Self {
            id,
            domain,
            codomain,
            origin: MorphismOrigin::Created,
            label,
        }
    }

    pub(super) fn composite(
        id: MorphismId,
        first: &Morphism,
        second: &Morphism,
        label: Option<String>,
    ) -> Self {
        Self {
            id,
            domain: first.domain,
            codomain: second.codomain,
            origin: MorphismOrigin::Composite {
                first: first.id,
                second: second.id,
            },
            label,
        }
    }

    pub fn id(&self) -> MorphismId {
        self.id
    }

    pub fn category(&self) -> CategoryId {
        self.id.category()
    }

    /// Source object
    pub fn domain(&self) -> ObjectId {
        self.domain
    }

    /// Target object
    pub fn codomain(&self) -> ObjectId {
        self.codomain
    }

    pub fn origin(&self) -> MorphismOrigin {
        self.origin
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_identity(&self) -> bool {
        matches!(self.origin, MorphismOrigin::Identity)
    }

    pub fn is_composite(&self) -> bool {
        matches!(self.origin, MorphismOrigin::Composite { .. })
    }

    /// Whether this morphism ends where `next` starts
    pub fn composable_with(&self, next: &Morphism) -> bool {
        self.codomain == next.domain
    }
}

impl PartialEq for Morphism {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Morphism {}

impl std::hash::Hash for Morphism {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_a_self_loop() {
        let category = CategoryId::new();
        let object = ObjectId::new(category);
        let id = Morphism::identity(MorphismId::new(category), object, None);

        assert!(id.is_identity());
        assert!(!id.is_composite());
        assert_eq!(id.domain(), object);
        assert_eq!(id.codomain(), object);
        assert!(id.composable_with(&id));
    }

    #[test]
    fn composite_spans_first_domain_to_second_codomain() {
        let category = CategoryId::new();
        let (x, y, z) = (
            ObjectId::new(category),
            ObjectId::new(category),
            ObjectId::new(category),
        );
        let f = Morphism::created(MorphismId::new(category), x, y, Some("f".into()));
        let g = Morphism::created(MorphismId::new(category), y, z, Some("g".into()));
        assert!(f.composable_with(&g));
        assert!(!g.composable_with(&f));

        let gf = Morphism::composite(MorphismId::new(category), &f, &g, None);
        assert_eq!(gf.domain(), x);
        assert_eq!(gf.codomain(), z);
        assert_eq!(
            gf.origin(),
            MorphismOrigin::Composite {
                first: f.id(),
                second: g.id()
            }
        );
    }

    #[test]
    fn equality_is_by_id() {
        let category = CategoryId::new();
        let x = ObjectId::new(category);
        let a = Morphism::created(MorphismId::new(category), x, x, None);
        let b = Morphism::created(MorphismId::new(category), x, x, None);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn origin_serializes_with_kind_tag() {
        let json = serde_json::to_value(MorphismOrigin::Created).unwrap();
        assert_eq!(json["kind"], "created");
    }
}
