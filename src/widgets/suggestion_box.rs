use crate::catalog::Catalog;
use crate::config::SuggestConfig;
use crate::search::{DisplayModel, Query, filter, render};
use crate::ui::highlight::segment_spans;
use crate::ui::span::Span;
use crate::widgets::base::ComponentBase;
use crate::widgets::traits::{
    DrawOutput, Drawable, InteractionResult, RenderContext, Visibility, WidgetAction,
};

/// Where a click landed, relative to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Input,
    /// A rendered suggestion row.
    Suggestion(usize),
    /// Inside the list container but not on a row.
    Container,
    Outside,
}

/// Host-independent state of one search field and its suggestion dropdown.
pub struct SuggestionBox {
    base: ComponentBase,
    catalog: Catalog,
    min_query_chars: usize,
    max_suggestions: Option<usize>,
    value: String,
    query: Query,
    model: DisplayModel,
    disposed: bool,
}

impl SuggestionBox {
    pub fn new(id: impl Into<String>, label: impl Into<String>, catalog: Catalog) -> Self {
        Self {
            base: ComponentBase::new(id, label),
            catalog,
            min_query_chars: 1,
            max_suggestions: None,
            value: String::new(),
            query: Query::default(),
            model: DisplayModel::hidden(),
            disposed: false,
        }
    }

    pub fn with_config(mut self, config: &SuggestConfig) -> Self {
        self.min_query_chars = config.min_query_chars.max(1);
        self.max_suggestions = config.max_suggestions;
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

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn model(&self) -> &DisplayModel {
        &self.model
    }

    pub fn visibility(&self) -> Visibility {
        if self.model.visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }

    pub fn is_visible(&self) -> bool {
        self.model.visible
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Rebuilds the dropdown from scratch for the field's new text.
    pub fn on_input(&mut self, raw: &str) -> InteractionResult {
        if self.disposed {
            return InteractionResult::ignored();
        }

        let was_visible = self.model.visible;
        self.value = raw.to_string();
        self.query = Query::parse(raw);

        self.model = if self.query.char_len() < self.min_query_chars {
            DisplayModel::hidden()
        } else {
            let mut list = filter(&self.catalog, &self.query);
            if let Some(max) = self.max_suggestions {
                list.truncate(max);
            }
            render(&list, &self.query)
        };

        tracing::debug!(
            widget = self.base.id(),
            query = %self.query,
            matches = self.model.lines.len(),
            "suggestions rebuilt"
        );

        let mut result = InteractionResult::handled();
        if was_visible != self.model.visible {
            result.push(WidgetAction::VisibilityChanged {
                visibility: self.visibility(),
            });
        }
        result
    }

    /// Copies the row's label into the field and closes the list.
    pub fn select(&mut self, row: usize) -> InteractionResult {
        if self.disposed || !self.model.visible {
            return InteractionResult::ignored();
        }
        let Some(line) = self.model.line(row) else {
            return InteractionResult::ignored();
        };

        self.value = line.label.clone();
        self.model.visible = false;
        tracing::debug!(widget = self.base.id(), value = %self.value, "suggestion selected");

        let mut result = InteractionResult::with_action(WidgetAction::SetInputValue {
            value: self.value.clone(),
        });
        result.push(WidgetAction::VisibilityChanged {
            visibility: Visibility::Hidden,
        });
        result
    }

    /// Hides the list, keeping its rows for the next time it is shown.
    pub fn on_outside_click(&mut self) -> InteractionResult {
        if self.disposed || !self.model.visible {
            return InteractionResult::ignored();
        }
        self.model.visible = false;
        InteractionResult::with_action(WidgetAction::VisibilityChanged {
            visibility: Visibility::Hidden,
        })
    }

    pub fn on_click(&mut self, target: ClickTarget) -> InteractionResult {
        match target {
            ClickTarget::Suggestion(row) => self.select(row),
            ClickTarget::Outside => self.on_outside_click(),
            ClickTarget::Input | ClickTarget::Container => InteractionResult::ignored(),
        }
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
        self.model = DisplayModel::hidden();
    }
}

impl Drawable for SuggestionBox {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn label(&self) -> &str {
        self.base.label()
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        let focused = ctx
            .focused_id
            .as_deref()
            .is_none_or(|id| id == self.base.id());
        let theme = &ctx.theme;

        let mut lines = vec![vec![
            Span::styled(self.base.prefixed_label(focused), theme.prompt),
            Span::styled(self.value.clone(), theme.input),
        ]];

        if self.model.visible {
            for line in &self.model.lines {
                let mut row = vec![Span::new("    ")];
                row.extend(segment_spans(&line.segments, theme.suggestion, theme.matched));
                lines.push(row);
            }
        }

        DrawOutput { lines }
    }
}
