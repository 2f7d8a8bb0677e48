use super::document::{Display, Document, ElementId};
use super::event::DomEvent;
use crate::catalog::{Catalog, CatalogProvider};
use crate::config::SuggestConfig;
use crate::widgets::suggestion_box::{ClickTarget, SuggestionBox};
use crate::widgets::traits::{InteractionResult, WidgetAction};

/// A `SuggestionBox` attached to a text input of a `Document`, mirrored
/// into a sibling `<ul>`.
pub struct DomSuggestions {
    input: ElementId,
    container: ElementId,
    widget: SuggestionBox,
    match_class: String,
}

impl DomSuggestions {
    /// Binds to the input named by `config.anchor_name`. A missing input or
    /// an unloadable catalog leaves the page untouched.
    pub fn mount(
        doc: &mut Document,
        provider: &dyn CatalogProvider,
        config: &SuggestConfig,
    ) -> Option<Self> {
        let Some(input) = doc.find_input_by_name(&config.anchor_name) else {
            tracing::warn!(
                anchor = %config.anchor_name,
                "search input not found; suggestions disabled"
            );
            return None;
        };

        let catalog = match provider.load() {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::warn!(error = %err, "catalog unavailable; suggestions disabled");
                return None;
            }
        };

        Self::attach(doc, input, catalog, config)
    }

    pub fn attach(
        doc: &mut Document,
        input: ElementId,
        catalog: Catalog,
        config: &SuggestConfig,
    ) -> Option<Self> {
        let container = doc.create_element("ul");
        doc.add_class(container, &config.container_class);
        doc.set_display(container, Display::None);
        if !doc.insert_after(input, container) {
            doc.remove(container);
            tracing::warn!("search input has no parent; suggestions disabled");
            return None;
        }

        let name = doc.attr(input, "name").unwrap_or_default().to_string();
        let widget = SuggestionBox::new(name.clone(), name, catalog).with_config(config);
        tracing::info!(entries = widget.catalog().len(), "suggestions mounted");

        Some(Self {
            input,
            container,
            widget,
            match_class: config.match_class.clone(),
        })
    }

    pub fn input(&self) -> ElementId {
        self.input
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn widget(&self) -> &SuggestionBox {
        &self.widget
    }

    pub fn handle(&mut self, doc: &mut Document, event: &DomEvent) -> InteractionResult {
        match *event {
            DomEvent::Input { target } if target == self.input => {
                let raw = doc.value(self.input).to_string();
                self.on_input(doc, &raw)
            }
            DomEvent::Click { target } => {
                let target = self.classify(doc, target);
                self.on_click(doc, target)
            }
            _ => InteractionResult::ignored(),
        }
    }

    pub fn on_input(&mut self, doc: &mut Document, raw: &str) -> InteractionResult {
        let result = self.widget.on_input(raw);
        if result.handled {
            self.rebuild_rows(doc);
            self.sync_display(doc);
        }
        result
    }

    pub fn on_click(&mut self, doc: &mut Document, target: ClickTarget) -> InteractionResult {
        let result = self.widget.on_click(target);
        for action in &result.actions {
            if let WidgetAction::SetInputValue { value } = action {
                doc.set_value(self.input, value.clone());
            }
        }
        if result.handled {
            self.sync_display(doc);
        }
        result
    }

    pub fn dispose(mut self, doc: &mut Document) {
        self.widget.dispose();
        doc.remove(self.container);
        tracing::info!("suggestions disposed");
    }

    fn classify(&self, doc: &Document, target: ElementId) -> ClickTarget {
        if doc.contains(self.input, target) {
            return ClickTarget::Input;
        }
        if !doc.contains(self.container, target) {
            return ClickTarget::Outside;
        }

        let mut current = target;
        while let Some(parent) = doc.parent(current) {
            if parent == self.container {
                return doc
                    .children(self.container)
                    .iter()
                    .position(|&row| row == current)
                    .map_or(ClickTarget::Container, ClickTarget::Suggestion);
            }
            current = parent;
        }
        ClickTarget::Container
    }

    fn rebuild_rows(&self, doc: &mut Document) {
        doc.clear_children(self.container);
        for line in &self.widget.model().lines {
            let row = doc.create_element("li");
            for segment in &line.segments {
                let text = doc.create_text(segment.text.clone());
                if segment.is_match {
                    let span = doc.create_element("span");
                    doc.add_class(span, &self.match_class);
                    doc.append_child(span, text);
                    doc.append_child(row, span);
                } else {
                    doc.append_child(row, text);
                }
            }
            doc.append_child(self.container, row);
        }
    }

    fn sync_display(&self, doc: &mut Document) {
        let display = if self.widget.is_visible() {
            Display::Block
        } else {
            Display::None
        };
        doc.set_display(self.container, display);
    }
}
