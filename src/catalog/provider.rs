use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{Catalog, CatalogEntry, SuggestionKind};
use crate::error::{Error, Result};
use crate::search::query::fold;

/// Supplies the widget's catalog at mount time.
pub trait CatalogProvider {
    fn load(&self) -> Result<Catalog>;
}

#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    catalog: Catalog,
}

impl StaticCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Catalog::from_labels(labels))
    }
}

impl CatalogProvider for StaticCatalog {
    fn load(&self) -> Result<Catalog> {
        Ok(self.catalog.clone())
    }
}

pub struct FnCatalog<F> {
    source: F,
}

impl<F> FnCatalog<F>
where
    F: Fn() -> Vec<String>,
{
    pub fn new(source: F) -> Self {
        Self { source }
    }
}

impl<F> CatalogProvider for FnCatalog<F>
where
    F: Fn() -> Vec<String>,
{
    fn load(&self) -> Result<Catalog> {
        Ok(Catalog::from_labels((self.source)()))
    }
}

/// Catalog decoded from JSON: either a plain array of labels or a
/// suggestion-endpoint payload `{"suggestions": [{"text", "type"}]}`.
#[derive(Debug, Clone)]
pub enum JsonCatalog {
    Text(String),
    File(PathBuf),
}

impl JsonCatalog {
    pub fn from_text(payload: impl Into<String>) -> Self {
        Self::Text(payload.into())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

impl CatalogProvider for JsonCatalog {
    fn load(&self) -> Result<Catalog> {
        match self {
            Self::Text(payload) => parse_catalog_json(payload),
            Self::File(path) => {
                let payload = std::fs::read_to_string(path).map_err(|source| Error::Io {
                    path: path.clone(),
                    source,
                })?;
                parse_catalog_json(&payload)
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Labels(Vec<String>),
    Response { suggestions: Vec<RawSuggestion> },
}

#[derive(Deserialize)]
struct RawSuggestion {
    text: String,
    #[serde(rename = "type", default)]
    kind: SuggestionKind,
}

/// Blank labels are dropped; of labels equal ignoring case the first wins.
pub fn parse_catalog_json(payload: &str) -> Result<Catalog> {
    let raw: Vec<CatalogEntry> = match serde_json::from_str::<Payload>(payload)? {
        Payload::Labels(labels) => labels.into_iter().map(CatalogEntry::new).collect(),
        Payload::Response { suggestions } => suggestions
            .into_iter()
            .map(|s| CatalogEntry {
                label: s.text,
                kind: s.kind,
            })
            .collect(),
    };

    let mut seen = HashSet::new();
    let catalog = raw
        .into_iter()
        .filter_map(|mut entry| {
            let trimmed = entry.label.trim();
            if trimmed.is_empty() {
                return None;
            }
            if trimmed.len() != entry.label.len() {
                entry.label = trimmed.to_string();
            }
            seen.insert(fold(&entry.label)).then_some(entry)
        })
        .collect::<Catalog>();

    tracing::debug!(entries = catalog.len(), "decoded catalog payload");
    Ok(catalog)
}
