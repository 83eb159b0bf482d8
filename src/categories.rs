use crate::model::Category;
use crate::store::TaskStore;

/// One-shot category cross-reference, loaded at session start.
///
/// A failed load leaves the store empty rather than erroring: category-driven
/// features degrade to an empty option set either way, so callers never need
/// to distinguish "none defined" from "load failed".
#[derive(Debug, Clone, Default)]
pub struct CategoryStore {
    categories: Vec<Category>,
}

impl CategoryStore {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn load(store: &impl TaskStore) -> Self {
        match store.list_categories() {
            Ok(categories) => Self { categories },
            Err(e) => {
                tracing::warn!(error = %e, "failed to load categories, continuing with none");
                Self::default()
            }
        }
    }

    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn name_of(&self, id: i64) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }
}
