pub mod backend;

pub use backend::{
    CursorPos, KeyCode, KeyEvent, KeyModifiers, RenderFrame, Terminal, TerminalEvent,
};
