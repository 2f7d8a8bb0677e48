#[cfg(feature = "terminal")]
pub mod app;
pub mod catalog;
pub mod config;
pub mod dom;
pub mod error;
#[cfg(feature = "terminal")]
pub mod logging;
pub mod search;
#[cfg(feature = "terminal")]
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use catalog::{Catalog, CatalogEntry, CatalogProvider, SuggestionKind};
pub use config::SuggestConfig;
pub use error::{Error, Result};
pub use search::{DisplayModel, Query, Segment, SuggestionLine, filter, highlight, render};
pub use widgets::{ClickTarget, SuggestionBox};
