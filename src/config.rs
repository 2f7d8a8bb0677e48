use std::path::Path;

use serde::Deserialize;

use crate::catalog::{Catalog, StaticCatalog};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SuggestConfig {
    /// `name` attribute of the search input the widget binds to.
    pub anchor_name: String,
    pub container_class: String,
    pub match_class: String,
    pub min_query_chars: usize,
    pub max_suggestions: Option<usize>,
    pub catalog: Option<Vec<String>>,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            anchor_name: "search".to_string(),
            container_class: "suggestions".to_string(),
            match_class: "match".to_string(),
            min_query_chars: 1,
            max_suggestions: None,
            catalog: None,
        }
    }
}

impl SuggestConfig {
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&text)?;
        tracing::info!(path = %path.display(), "loaded suggestion config");
        Ok(config)
    }

    pub fn with_anchor_name(mut self, name: impl Into<String>) -> Self {
        self.anchor_name = name.into();
        self
    }

    pub fn with_min_query_chars(mut self, min: usize) -> Self {
        self.min_query_chars = min.max(1);
        self
    }

    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = Some(max);
        self
    }

    pub fn with_catalog<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.catalog = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("anchor_name", &self.anchor_name),
            ("container_class", &self.container_class),
            ("match_class", &self.match_class),
        ] {
            if value.trim().is_empty() {
                return Err(Error::InvalidConfig(format!("{field} must not be empty")));
            }
            if value.chars().any(char::is_whitespace) {
                return Err(Error::InvalidConfig(format!(
                    "{field} must be a single token, got {value:?}"
                )));
            }
        }
        if self.min_query_chars == 0 {
            return Err(Error::InvalidConfig(
                "min_query_chars must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Configured labels, or the built-in product list.
    pub fn catalog_provider(&self) -> StaticCatalog {
        match &self.catalog {
            Some(labels) => StaticCatalog::from_labels(labels.iter().cloned()),
            None => StaticCatalog::new(Catalog::default_products()),
        }
    }
}
