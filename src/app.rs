use unicode_width::UnicodeWidthStr;

use crate::catalog::Catalog;
use crate::config::SuggestConfig;
use crate::terminal::{CursorPos, KeyCode, KeyEvent, KeyModifiers, RenderFrame};
use crate::ui::span::{Span, line_width};
use crate::widgets::suggestion_box::{ClickTarget, SuggestionBox};
use crate::widgets::text_field::TextField;
use crate::widgets::traits::{Drawable, RenderContext, WidgetAction};

const HINT: &str = "Type to search. Click a suggestion to pick it. Esc quits.";

/// Terminal host for one suggestion box: keys edit the field, mouse clicks
/// play the role of document clicks.
pub struct App {
    field: TextField,
    suggestions: SuggestionBox,
    ctx: RenderContext,
    exit: bool,
}

impl App {
    pub fn new(catalog: Catalog, config: &SuggestConfig) -> Self {
        Self {
            field: TextField::new(),
            suggestions: SuggestionBox::new("search", "Search", catalog).with_config(config),
            ctx: RenderContext::default(),
            exit: false,
        }
    }

    pub fn should_exit(&self) -> bool {
        self.exit
    }

    pub fn value(&self) -> &str {
        self.field.value()
    }

    pub fn suggestions(&self) -> &SuggestionBox {
        &self.suggestions
    }

    /// Returns whether the screen needs redrawing.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let edited = match key.code {
            KeyCode::Esc => {
                self.exit = true;
                return false;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.exit = true;
                return false;
            }
            KeyCode::Char(ch) => {
                self.field.insert_char(ch);
                true
            }
            KeyCode::Backspace => self.field.backspace(),
            KeyCode::Delete => self.field.delete(),
            KeyCode::Left => return self.field.move_left(),
            KeyCode::Right => return self.field.move_right(),
            KeyCode::Enter | KeyCode::Unknown => false,
        };

        if edited {
            self.suggestions.on_input(self.field.value());
        }
        edited
    }

    pub fn handle_click(&mut self, pos: CursorPos) -> bool {
        let target = self.hit_test(pos);
        let result = self.suggestions.on_click(target);
        for action in &result.actions {
            if let WidgetAction::SetInputValue { value } = action {
                self.field.set_value(value.clone());
            }
        }
        result.request_render
    }

    /// Row 0 is the field; rows below it are suggestions while the list is
    /// shown.
    pub fn hit_test(&self, pos: CursorPos) -> ClickTarget {
        let lines = self.suggestions.draw(&self.ctx).lines;
        let row = pos.row as usize;
        let col = pos.col as usize;

        if row == 0 {
            return if col < line_width(&lines[0]).max(1) {
                ClickTarget::Input
            } else {
                ClickTarget::Outside
            };
        }
        match lines.get(row) {
            Some(line) if col < line_width(line) => ClickTarget::Suggestion(row - 1),
            Some(_) => ClickTarget::Container,
            None => ClickTarget::Outside,
        }
    }

    pub fn frame(&self) -> RenderFrame {
        let mut lines = self.suggestions.draw(&self.ctx).lines;
        lines[0] = vec![
            Span::styled(self.prompt(), self.ctx.theme.prompt),
            Span::styled(self.field.value().to_string(), self.ctx.theme.input),
        ];
        let cursor = CursorPos {
            col: (UnicodeWidthStr::width(self.prompt().as_str())
                + UnicodeWidthStr::width(self.field.before_cursor())) as u16,
            row: 0,
        };
        lines.push(Vec::new());
        lines.push(vec![Span::styled(HINT, self.ctx.theme.hint)]);

        RenderFrame {
            lines,
            cursor: Some(cursor),
        }
    }

    fn prompt(&self) -> String {
        format!("> {}: ", self.suggestions.label())
    }
}
