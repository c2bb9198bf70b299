use std::collections::BTreeMap;

use serde::Deserialize;

/// Display name of the synthetic "no filter" entry.
pub const ANY_CATEGORY: &str = "Any Category";

/// A topic grouping for questions, identified by an id assigned by the
/// remote service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

/// Display name → id lookup for category filters.
///
/// Always contains the synthetic [`ANY_CATEGORY`] entry with id 0. Id 0 never
/// names a real remote category and is never emitted as a filter parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryIndex {
    entries: BTreeMap<String, u32>,
}

impl Default for CategoryIndex {
    fn default() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(ANY_CATEGORY.to_string(), 0);
        Self { entries }
    }
}

impl CategoryIndex {
    /// Build a fresh index from fetched categories, replacing any prior
    /// contents wholesale. The synthetic entry is always present.
    #[must_use]
    pub fn from_categories(categories: Vec<Category>) -> Self {
        let mut index = Self::default();
        for category in categories {
            index.entries.insert(category.name, category.id);
        }
        index
    }

    /// Resolve a display name to a filter id.
    ///
    /// Returns `None` for unknown names and for the synthetic id 0, so
    /// callers never append a `category` parameter for either.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<u32> {
        match self.entries.get(name) {
            None | Some(0) => None,
            Some(id) => Some(*id),
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display names in sorted order, for pickers.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
