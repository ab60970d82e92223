//! Serializable views of a category, for inspection and debug output

use super::category::{CategoryId, CategoryMetadata};
use super::morphism::{MorphismId, MorphismOrigin};
use super::object::ObjectId;
use crate::naming::NamingStrategy;
use serde::Serialize;

/// A point-in-time copy of a category's objects and morphisms
#[derive(Debug, Clone, Serialize)]
pub struct CategorySnapshot {
    pub id: CategoryId,
    pub name: String,
    pub naming: NamingStrategy,
    pub metadata: CategoryMetadata,
    /// Objects in creation order
    pub objects: Vec<ObjectSnapshot>,
    /// Morphisms in creation order, identities included
    pub morphisms: Vec<MorphismSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ObjectSnapshot {
    pub id: ObjectId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub identity: MorphismId,
}

#[derive(Debug, Clone, Serialize)]
pub struct MorphismSnapshot {
    pub id: MorphismId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub domain: ObjectId,
    pub codomain: ObjectId,
    pub origin: MorphismOrigin,
}

impl CategorySnapshot {
    /// Labels of all morphisms that have one, in creation order
    pub fn morphism_labels(&self) -> Vec<&str> {
        self.morphisms
            .iter()
            .filter_map(|m| m.label.as_deref())
            .collect()
    }
}
