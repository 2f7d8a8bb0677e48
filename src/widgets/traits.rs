use crate::ui::span::SpanLine;
use crate::ui::style::Theme;

// ---------------------------------------------------------------------------
// Render context & output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub theme: Theme,
    pub focused_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DrawOutput {
    pub lines: Vec<SpanLine>,
}

pub trait Drawable {
    fn id(&self) -> &str;
    fn label(&self) -> &str {
        ""
    }
    fn draw(&self, ctx: &RenderContext) -> DrawOutput;
}

// ---------------------------------------------------------------------------
// InteractionResult
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Visible,
    #[default]
    Hidden,
}

/// Actions emitted by widgets; the host applies them to its own surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetAction {
    /// The input field must show `value`; no input event follows.
    SetInputValue { value: String },
    VisibilityChanged { visibility: Visibility },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionResult {
    pub handled: bool,
    pub request_render: bool,
    pub actions: Vec<WidgetAction>,
}

impl InteractionResult {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled() -> Self {
        Self {
            handled: true,
            request_render: true,
            actions: Vec::new(),
        }
    }

    pub fn with_action(action: WidgetAction) -> Self {
        Self {
            handled: true,
            request_render: true,
            actions: vec![action],
        }
    }

    pub fn push(&mut self, action: WidgetAction) {
        self.handled = true;
        self.request_render = true;
        self.actions.push(action);
    }
}
