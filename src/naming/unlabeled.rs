use super::{discard_requested, LabelProvider};
use crate::graph::CategoryResult;

/// Assigns no labels at all
#[derive(Debug, Clone, Copy, Default)]
pub struct Unlabeled;

impl LabelProvider for Unlabeled {
    fn kind(&self) -> &'static str {
        "unlabeled"
    }

    fn object_label(
        &mut self,
        category: &str,
        requested: Option<String>,
    ) -> CategoryResult<Option<String>> {
        discard_requested(self.kind(), category, requested);
        Ok(None)
    }

    fn identity_label(&self, _category: &str, _object_label: Option<&str>) -> Option<String> {
        None
    }

    fn morphism_label(
        &mut self,
        category: &str,
        requested: Option<String>,
    ) -> CategoryResult<Option<String>> {
        discard_requested(self.kind(), category, requested);
        Ok(None)
    }

    fn composite_label(
        &mut self,
        category: &str,
        _first: Option<&str>,
        _second: Option<&str>,
        requested: Option<String>,
    ) -> CategoryResult<Option<String>> {
        discard_requested(self.kind(), category, requested);
        Ok(None)
    }
}
