//! Browser bindings: page JavaScript owns the DOM and calls into these for
//! filtering, highlighting and widget state.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use suggest_box::catalog::Catalog;
use suggest_box::catalog::provider::parse_catalog_json;
use suggest_box::config::SuggestConfig;
use suggest_box::search::{DisplayModel, Query, filter, render};
use suggest_box::ui::html::{display_json, render_list};
use suggest_box::widgets::{SuggestionBox, WidgetAction};

const MATCH_CLASS: &str = "match";

fn load_catalog(catalog_json: &str) -> Catalog {
    parse_catalog_json(catalog_json).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring unreadable catalog");
        Catalog::default()
    })
}

fn model_for(catalog_json: &str, query: &str) -> DisplayModel {
    let catalog = load_catalog(catalog_json);
    let query = Query::parse(query);
    render(&filter(&catalog, &query), &query)
}

/// Display model for `query` as JSON: `{visible, display, items: [...]}`.
///
/// `catalog_json` is a JSON array of labels or a
/// `{"suggestions": [{"text", "type"}]}` payload. An unreadable catalog
/// behaves as an empty one.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn suggest(catalog_json: &str, query: &str) -> String {
    display_json(&model_for(catalog_json, query), MATCH_CLASS).to_string()
}

/// `<li>` markup for the suggestion container.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn suggest_html(catalog_json: &str, query: &str) -> String {
    render_list(&model_for(catalog_json, query), MATCH_CLASS)
}

/// One widget instance driven from page event listeners.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct SuggestionHandle {
    widget: SuggestionBox,
    match_class: String,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl SuggestionHandle {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(constructor))]
    pub fn new(catalog_json: &str, config_yaml: &str) -> SuggestionHandle {
        let config = if config_yaml.trim().is_empty() {
            SuggestConfig::default()
        } else {
            SuggestConfig::from_yaml(config_yaml).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "ignoring invalid config");
                SuggestConfig::default()
            })
        };
        SuggestionHandle {
            widget: SuggestionBox::new(config.anchor_name.clone(), "", load_catalog(catalog_json))
                .with_config(&config),
            match_class: config.match_class,
        }
    }

    /// Recomputes the list for the field's value; returns display JSON.
    pub fn on_input(&mut self, value: &str) -> String {
        self.widget.on_input(value);
        self.display()
    }

    /// Returns the label to put in the field, or `None` when `row` is not a
    /// visible suggestion.
    pub fn select(&mut self, row: usize) -> Option<String> {
        self.widget
            .select(row)
            .actions
            .into_iter()
            .find_map(|action| match action {
                WidgetAction::SetInputValue { value } => Some(value),
                WidgetAction::VisibilityChanged { .. } => None,
            })
    }

    pub fn on_outside_click(&mut self) {
        self.widget.on_outside_click();
    }

    pub fn is_visible(&self) -> bool {
        self.widget.is_visible()
    }

    pub fn display(&self) -> String {
        display_json(self.widget.model(), &self.match_class).to_string()
    }

    pub fn dispose(&mut self) {
        self.widget.dispose();
    }
}
