#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Reset,
    Black,
    DarkGrey,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub color: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
    pub underline: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// `other` wins wherever it sets something.
    pub fn merge(self, other: Style) -> Style {
        Style {
            color: other.color.or(self.color),
            background: other.background.or(self.background),
            bold: self.bold || other.bold,
            underline: self.underline || other.underline,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub prompt: Style,
    pub input: Style,
    pub suggestion: Style,
    pub matched: Style,
    pub hint: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            prompt: Style::new().bold(),
            input: Style::default(),
            suggestion: Style::default(),
            matched: Style::new().color(Color::Yellow).bold().underline(),
            hint: Style::new().color(Color::DarkGrey),
        }
    }
}
