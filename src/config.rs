//! Construction-time configuration for categories

use crate::naming::NamingStrategy;
use serde::{Deserialize, Serialize};

/// Settings a category is created with
///
/// Neither field can change once the category exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Category name, also the prefix of serial labels
    pub name: String,
    /// Label provider to install
    #[serde(default)]
    pub naming: NamingStrategy,
}

impl CategoryConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            naming: NamingStrategy::default(),
        }
    }

    pub fn with_naming(mut self, naming: NamingStrategy) -> Self {
        self.naming = naming;
        self
    }
}
