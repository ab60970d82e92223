//! Naming strategies for objects and morphisms
//!
//! A category picks one [`NamingStrategy`] when it is created and keeps the
//! matching [`LabelProvider`] for its whole life. Providers only produce
//! label strings. They never touch the graph, so no strategy can break a
//! structural invariant.

mod explicit;
mod serial;
mod unlabeled;

pub use explicit::ExplicitLabels;
pub use serial::SerialLabels;
pub use unlabeled::Unlabeled;

use crate::graph::CategoryResult;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Glyph placed between operand labels of a synthesised composite label
pub const COMPOSITION_MARKER: char = '∘';

/// Which label provider a category uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingStrategy {
    /// No labels; entities are known by id only
    #[default]
    Unlabeled,
    /// Caller supplies a label at every creation call
    Explicit,
    /// Auto-generated `<category><n>` / `<category>_mor<n>` labels
    Serial,
}

impl NamingStrategy {
    /// Build a fresh provider for this strategy
    pub fn provider(self) -> Box<dyn LabelProvider> {
        match self {
            NamingStrategy::Unlabeled => Box::new(Unlabeled),
            NamingStrategy::Explicit => Box::new(ExplicitLabels),
            NamingStrategy::Serial => Box::new(SerialLabels::new()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NamingStrategy::Unlabeled => "unlabeled",
            NamingStrategy::Explicit => "explicit",
            NamingStrategy::Serial => "serial",
        }
    }
}

impl std::fmt::Display for NamingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Produces labels at creation and composition time
///
/// The category calls a provider only after every typing check has
/// passed, so a provider that advances internal state (counters) never
/// does so for a call that ends up failing. A provider may itself refuse
/// with [`CategoryError::MissingLabel`](crate::CategoryError::MissingLabel);
/// it must not have changed state when it does.
pub trait LabelProvider: std::fmt::Debug + Send + Sync {
    /// Short name of the strategy, used in snapshots and logs
    fn kind(&self) -> &'static str;

    fn object_label(
        &mut self,
        category: &str,
        requested: Option<String>,
    ) -> CategoryResult<Option<String>>;

    /// Label for the identity of a freshly created object
    fn identity_label(&self, category: &str, object_label: Option<&str>) -> Option<String> {
        object_label.map(|label| format!("{category}_morId{label}"))
    }

    fn morphism_label(
        &mut self,
        category: &str,
        requested: Option<String>,
    ) -> CategoryResult<Option<String>>;

    /// Label for the composite of `first` then `second`
    fn composite_label(
        &mut self,
        category: &str,
        first: Option<&str>,
        second: Option<&str>,
        requested: Option<String>,
    ) -> CategoryResult<Option<String>>;
}

/// Drop a caller-supplied label the strategy has no use for
fn discard_requested(strategy: &str, category: &str, requested: Option<String>) {
    if let Some(label) = requested {
        warn!(
            strategy,
            category,
            label = %label,
            "ignoring caller-supplied label"
        );
    }
}
