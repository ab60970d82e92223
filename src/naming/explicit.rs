use super::{LabelProvider, COMPOSITION_MARKER};
use crate::graph::{CategoryError, CategoryResult, EntityKind};

/// Labels supplied by the caller at every creation call
///
/// Composites without a supplied label get `"<second>∘<first>"`, read
/// right to left like function composition.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitLabels;

impl LabelProvider for ExplicitLabels {
    fn kind(&self) -> &'static str {
        "explicit"
    }

    fn object_label(
        &mut self,
        _category: &str,
        requested: Option<String>,
    ) -> CategoryResult<Option<String>> {
        requested.map(Some).ok_or(CategoryError::MissingLabel {
            entity: EntityKind::Object,
        })
    }

    fn morphism_label(
        &mut self,
        _category: &str,
        requested: Option<String>,
    ) -> CategoryResult<Option<String>> {
        requested.map(Some).ok_or(CategoryError::MissingLabel {
            entity: EntityKind::Morphism,
        })
    }

    fn composite_label(
        &mut self,
        _category: &str,
        first: Option<&str>,
        second: Option<&str>,
        requested: Option<String>,
    ) -> CategoryResult<Option<String>> {
        if let Some(label) = requested {
            return Ok(Some(label));
        }
        match (first, second) {
            (Some(first), Some(second)) => {
                Ok(Some(format!("{second}{COMPOSITION_MARKER}{first}")))
            }
            _ => Err(CategoryError::MissingLabel {
                entity: EntityKind::Morphism,
            }),
        }
    }
}
