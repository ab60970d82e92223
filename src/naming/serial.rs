use super::{discard_requested, LabelProvider};
use crate::graph::CategoryResult;

/// Auto-incrementing labels backed by per-category counters
///
/// Objects are labelled `<category><n>`, morphisms (composites included)
/// `<category>_mor<n>`. Each counter starts at 0 and only ever moves
/// forward. Identities take their label from the object and do not
/// consume a morphism number.
#[derive(Debug, Clone, Default)]
pub struct SerialLabels {
    next_object: u64,
    next_morphism: u64,
}

impl SerialLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of object labels handed out so far
    pub fn objects_issued(&self) -> u64 {
        self.next_object
    }

    /// Number of morphism labels handed out so far
    pub fn morphisms_issued(&self) -> u64 {
        self.next_morphism
    }

    fn next_morphism_label(&mut self, category: &str) -> String {
        let n = self.next_morphism;
        self.next_morphism += 1;
        format!("{category}_mor{n}")
    }
}

impl LabelProvider for SerialLabels {
    fn kind(&self) -> &'static str {
        "serial"
    }

    fn object_label(
        &mut self,
        category: &str,
        requested: Option<String>,
    ) -> CategoryResult<Option<String>> {
        discard_requested(self.kind(), category, requested);
        let n = self.next_object;
        self.next_object += 1;
        Ok(Some(format!("{category}{n}")))
    }

    fn morphism_label(
        &mut self,
        category: &str,
        requested: Option<String>,
    ) -> CategoryResult<Option<String>> {
        discard_requested(self.kind(), category, requested);
        Ok(Some(self.next_morphism_label(category)))
    }

    fn composite_label(
        &mut self,
        category: &str,
        _first: Option<&str>,
        _second: Option<&str>,
        requested: Option<String>,
    ) -> CategoryResult<Option<String>> {
        discard_requested(self.kind(), category, requested);
        Ok(Some(self.next_morphism_label(category)))
    }
}
