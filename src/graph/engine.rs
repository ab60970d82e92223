//! CategoryEngine: a concurrent registry of categories

use super::category::{Category, CategoryId};
use super::error::{CategoryError, CategoryResult};
use super::morphism::MorphismId;
use super::object::ObjectId;
use crate::config::CategoryConfig;
use crate::naming::NamingStrategy;
use dashmap::mapref::one::RefMut;
use dashmap::DashMap;
use tracing::info;

/// Holds categories and serialises mutation per category
///
/// Every mutating call holds the category's entry exclusively for its
/// whole duration, so the dual-index update and any counter bump happen
/// as one step. Reads take shared guards and may run alongside each
/// other.
#[derive(Debug, Default)]
pub struct CategoryEngine {
    categories: DashMap<CategoryId, Category>,
}

impl CategoryEngine {
    pub fn new() -> Self {
        Self {
            categories: DashMap::new(),
        }
    }

    /// Create and register an empty category
    pub fn create_category(&self, name: impl Into<String>, naming: NamingStrategy) -> CategoryId {
        self.insert_category(Category::new(name, naming))
    }

    pub fn create_category_from_config(&self, config: CategoryConfig) -> CategoryId {
        self.insert_category(Category::from_config(config))
    }

    /// Register an existing category, returning its id
    pub fn insert_category(&self, category: Category) -> CategoryId {
        let id = category.id();
        info!(category = %category.name(), %id, naming = %category.naming(), "registered category");
        self.categories.insert(id, category);
        id
    }

    /// Remove a category together with everything it owns
    pub fn remove_category(&self, id: &CategoryId) -> Option<Category> {
        self.categories.remove(id).map(|(_, category)| category)
    }

    pub fn create_object(&self, category: &CategoryId) -> CategoryResult<ObjectId> {
        self.write(category)?.create_object()
    }

    pub fn create_labeled_object(
        &self,
        category: &CategoryId,
        label: impl Into<String>,
    ) -> CategoryResult<ObjectId> {
        self.write(category)?.create_labeled_object(label)
    }

    /// Create a morphism inside the category that owns `source`
    pub fn create_morphism(&self, source: ObjectId, target: ObjectId) -> CategoryResult<MorphismId> {
        self.write(&source.category())?.create_morphism(source, target)
    }

    pub fn create_labeled_morphism(
        &self,
        source: ObjectId,
        target: ObjectId,
        label: impl Into<String>,
    ) -> CategoryResult<MorphismId> {
        self.write(&source.category())?
            .create_labeled_morphism(source, target, label)
    }

    /// Compose inside the category that owns `first`
    pub fn compose(&self, first: MorphismId, second: MorphismId) -> CategoryResult<MorphismId> {
        self.write(&first.category())?.compose(first, second)
    }

    pub fn compose_labeled(
        &self,
        first: MorphismId,
        second: MorphismId,
        label: impl Into<String>,
    ) -> CategoryResult<MorphismId> {
        self.write(&first.category())?
            .compose_labeled(first, second, label)
    }

    /// Run a read-only closure against a category
    pub fn with_category<R>(
        &self,
        id: &CategoryId,
        read: impl FnOnce(&Category) -> R,
    ) -> CategoryResult<R> {
        let category = self
            .categories
            .get(id)
            .ok_or(CategoryError::CategoryNotFound(*id))?;
        Ok(read(category.value()))
    }

    /// Find a category by name
    pub fn find_by_name(&self, name: &str) -> Option<CategoryId> {
        self.categories
            .iter()
            .find(|entry| entry.value().name() == name)
            .map(|entry| *entry.key())
    }

    /// List all category IDs
    pub fn list_categories(&self) -> Vec<CategoryId> {
        self.categories.iter().map(|r| *r.key()).collect()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn has_category(&self, id: &CategoryId) -> bool {
        self.categories.contains_key(id)
    }

    fn write(&self, id: &CategoryId) -> CategoryResult<RefMut<'_, CategoryId, Category>> {
        self.categories
            .get_mut(id)
            .ok_or(CategoryError::CategoryNotFound(*id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_engine() {
        let engine = CategoryEngine::new();
        assert_eq!(engine.category_count(), 0);
    }

    #[test]
    fn test_create_category() {
        let engine = CategoryEngine::new();
        let id = engine.create_category("A", NamingStrategy::Serial);

        assert_eq!(engine.category_count(), 1);
        assert!(engine.has_category(&id));
        assert_eq!(engine.find_by_name("A"), Some(id));
        assert_eq!(
            engine.with_category(&id, |c| c.naming()).unwrap(),
            NamingStrategy::Serial
        );
    }

    #[test]
    fn test_mutations_route_to_owning_category() {
        let engine = CategoryEngine::new();
        let id = engine.create_category("A", NamingStrategy::Serial);
        let a0 = engine.create_object(&id).unwrap();
        let a1 = engine.create_object(&id).unwrap();
        let f = engine.create_morphism(a0, a1).unwrap();
        let g = engine.create_morphism(a1, a1).unwrap();
        let gf = engine.compose(f, g).unwrap();

        let described = engine
            .with_category(&id, |c| c.describe_morphism(&gf))
            .unwrap();
        assert_eq!(described.as_deref(), Some("A_mor2: A0 -> A1"));
    }

    #[test]
    fn test_unknown_category() {
        let engine = CategoryEngine::new();
        let missing = CategoryId::new();
        assert!(matches!(
            engine.create_object(&missing),
            Err(CategoryError::CategoryNotFound(id)) if id == missing
        ));
        assert!(engine.with_category(&missing, |_| ()).is_err());
    }

    #[test]
    fn test_cross_category_morphism_rejected() {
        let engine = CategoryEngine::new();
        let a = engine.create_category("A", NamingStrategy::Unlabeled);
        let b = engine.create_category("B", NamingStrategy::Unlabeled);
        let a0 = engine.create_object(&a).unwrap();
        let b0 = engine.create_object(&b).unwrap();

        assert!(matches!(
            engine.create_morphism(a0, b0),
            Err(CategoryError::CategoryMismatch { .. })
        ));
        assert_eq!(engine.with_category(&a, |c| c.morphism_count()).unwrap(), 1);
        assert_eq!(engine.with_category(&b, |c| c.morphism_count()).unwrap(), 1);
    }

    #[test]
    fn test_remove_category() {
        let engine = CategoryEngine::new();
        let id = engine.create_category_from_config(CategoryConfig::new("A"));
        assert_eq!(engine.category_count(), 1);

        let removed = engine.remove_category(&id);
        assert!(removed.is_some());
        assert_eq!(engine.category_count(), 0);
    }
}
