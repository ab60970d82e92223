//! Errors raised by category operations

use super::category::CategoryId;
use super::morphism::MorphismId;
use super::object::ObjectId;
use thiserror::Error;

/// Which kind of entity an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Object,
    Morphism,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Object => write!(f, "object"),
            EntityKind::Morphism => write!(f, "morphism"),
        }
    }
}

/// Errors that can occur while building or composing inside a category
#[derive(Debug, Error)]
pub enum CategoryError {
    /// An endpoint or operand belongs to a different category
    #[error("Category mismatch: expected category {expected}, found {found}")]
    CategoryMismatch {
        expected: CategoryId,
        found: CategoryId,
    },

    /// `compose(f, g)` requested with `f.codomain != g.domain`
    #[error("Cannot compose {first} then {second}: codomain {codomain} is not domain {domain}")]
    CompositionDomainMismatch {
        first: MorphismId,
        second: MorphismId,
        codomain: ObjectId,
        domain: ObjectId,
    },

    /// The explicit naming strategy was given nothing to label with
    #[error("Missing label: explicitly named categories require a label for every {entity}")]
    MissingLabel { entity: EntityKind },

    #[error("Object not found: {0}")]
    ObjectNotFound(ObjectId),

    #[error("Morphism not found: {0}")]
    MorphismNotFound(MorphismId),

    #[error("Cannot compose an empty path")]
    EmptyPath,

    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for category operations
pub type CategoryResult<T> = Result<T, CategoryError>;

impl CategoryError {
    /// True for the typing errors a caller can fix by choosing other operands
    pub fn is_typing_error(&self) -> bool {
        matches!(
            self,
            CategoryError::CategoryMismatch { .. } | CategoryError::CompositionDomainMismatch { .. }
        )
    }
}
