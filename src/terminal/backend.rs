use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent,
    KeyCode as CrosstermKeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind,
    KeyModifiers as CrosstermKeyModifiers, MouseButton, MouseEventKind,
};
use crossterm::style::{
    Attribute, Color as CrosstermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::span::SpanLine;
use crate::ui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Unknown,
    Char(char),
    Enter,
    Esc,
    Backspace,
    Delete,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyModifiers(u8);

impl KeyModifiers {
    pub const NONE: Self = Self(0);
    pub const SHIFT: Self = Self(1 << 0);
    pub const CONTROL: Self = Self(1 << 1);
    pub const ALT: Self = Self(1 << 2);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPos {
    pub col: u16,
    pub row: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalEvent {
    Key(KeyEvent),
    /// Left button pressed at a screen cell.
    Click(CursorPos),
    Resize,
    Tick,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

pub struct Terminal {
    stdout: Stdout,
    width: u16,
    height: u16,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout: io::stdout(),
            width,
            height,
        })
    }

    pub fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(self.stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;
        Ok(())
    }

    /// Runs every restore step even when an earlier one fails, then
    /// reports the first failure.
    pub fn exit(&mut self) -> io::Result<()> {
        first_error([
            terminal::disable_raw_mode(),
            execute!(self.stdout, DisableMouseCapture),
            execute!(self.stdout, LeaveAlternateScreen),
            execute!(self.stdout, Show),
        ])
    }

    pub fn poll_event(&mut self, timeout: Duration) -> io::Result<TerminalEvent> {
        if !event::poll(timeout)? {
            return Ok(TerminalEvent::Tick);
        }
        match event::read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(TerminalEvent::Key(map_key_event(key)))
            }
            CrosstermEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => Ok(TerminalEvent::Click(CursorPos {
                    col: mouse.column,
                    row: mouse.row,
                })),
                _ => Ok(TerminalEvent::Tick),
            },
            CrosstermEvent::Resize(width, height) => {
                self.width = width;
                self.height = height;
                Ok(TerminalEvent::Resize)
            }
            _ => Ok(TerminalEvent::Tick),
        }
    }

    pub fn render_frame(&mut self, frame: &RenderFrame) -> io::Result<()> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        queue!(self.stdout, Hide, MoveTo(0, 0), Clear(ClearType::All))?;
        for (row, line) in frame.lines.iter().take(self.height as usize).enumerate() {
            queue!(self.stdout, MoveTo(0, row as u16))?;
            self.write_span_line(line)?;
        }
        if let Some(cur) = frame.cursor {
            let col = cur.col.min(self.width.saturating_sub(1));
            queue!(self.stdout, MoveTo(col, cur.row), Show)?;
        }
        self.stdout.flush()
    }

    fn write_span_line(&mut self, line: &SpanLine) -> io::Result<()> {
        let width = self.width.saturating_sub(1) as usize;
        let mut used = 0usize;
        for span in line {
            if used >= width {
                break;
            }
            let clipped = clip_to_width(&span.text, width - used);
            if clipped.is_empty() {
                continue;
            }
            if let Some(color) = span.style.color {
                queue!(self.stdout, SetForegroundColor(map_color(color)))?;
            }
            if let Some(background) = span.style.background {
                queue!(self.stdout, SetBackgroundColor(map_color(background)))?;
            }
            if span.style.bold {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }
            if span.style.underline {
                queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
            }
            queue!(
                self.stdout,
                Print(clipped.as_str()),
                ResetColor,
                SetAttribute(Attribute::Reset)
            )?;
            used = used.saturating_add(UnicodeWidthStr::width(clipped.as_str()));
        }
        Ok(())
    }
}

fn clip_to_width(text: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out
}

fn map_color(color: Color) -> CrosstermColor {
    match color {
        Color::Reset => CrosstermColor::Reset,
        Color::Black => CrosstermColor::Black,
        Color::DarkGrey => CrosstermColor::DarkGrey,
        Color::Red => CrosstermColor::Red,
        Color::Green => CrosstermColor::Green,
        Color::Yellow => CrosstermColor::DarkYellow,
        Color::Blue => CrosstermColor::DarkBlue,
        Color::Magenta => CrosstermColor::DarkMagenta,
        Color::Cyan => CrosstermColor::DarkCyan,
        Color::White => CrosstermColor::White,
    }
}

fn map_key_event(key: CrosstermKeyEvent) -> KeyEvent {
    KeyEvent {
        code: map_key_code(key.code),
        modifiers: map_key_modifiers(key.modifiers),
    }
}

fn map_key_code(code: CrosstermKeyCode) -> KeyCode {
    match code {
        CrosstermKeyCode::Char(ch) => KeyCode::Char(ch),
        CrosstermKeyCode::Enter => KeyCode::Enter,
        CrosstermKeyCode::Esc => KeyCode::Esc,
        CrosstermKeyCode::Backspace => KeyCode::Backspace,
        CrosstermKeyCode::Delete => KeyCode::Delete,
        CrosstermKeyCode::Left => KeyCode::Left,
        CrosstermKeyCode::Right => KeyCode::Right,
        _ => KeyCode::Unknown,
    }
}

fn map_key_modifiers(modifiers: CrosstermKeyModifiers) -> KeyModifiers {
    let mut out = KeyModifiers::NONE;
    if modifiers.contains(CrosstermKeyModifiers::SHIFT) {
        out.0 |= KeyModifiers::SHIFT.0;
    }
    if modifiers.contains(CrosstermKeyModifiers::CONTROL) {
        out.0 |= KeyModifiers::CONTROL.0;
    }
    if modifiers.contains(CrosstermKeyModifiers::ALT) {
        out.0 |= KeyModifiers::ALT.0;
    }
    out
}

fn first_error<const N: usize>(results: [io::Result<()>; N]) -> io::Result<()> {
    results.into_iter().collect()
}
