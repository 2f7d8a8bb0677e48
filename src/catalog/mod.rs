pub mod provider;

pub use provider::{CatalogProvider, FnCatalog, JsonCatalog, StaticCatalog};

use serde::{Deserialize, Serialize};

/// Product names used when no catalog is configured.
pub const DEFAULT_PRODUCTS: &[&str] = &[
    "Milk",
    "Sugar",
    "Bread",
    "Chocolate",
    "Nutribullet Blender NBR1212R",
    "Moulinex Blender LM422",
    "Brookside Milk",
    "Naivas Fresh Eggs",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    #[default]
    Product,
    Category,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub label: String,
    #[serde(default)]
    pub kind: SuggestionKind,
}

impl CatalogEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: SuggestionKind::Product,
        }
    }

    pub fn category(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: SuggestionKind::Category,
        }
    }
}

/// Ordered, immutable list of suggestion candidates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: labels.into_iter().map(CatalogEntry::new).collect(),
        }
    }

    pub fn default_products() -> Self {
        Self::from_labels(DEFAULT_PRODUCTS.iter().copied())
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<T: IntoIterator<Item = CatalogEntry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
