//! # Keys
//!
//! The keyboard surface the core understands. The TUI adapter translates
//! crossterm events into `Key` values, so nothing under `core` depends on a
//! terminal library.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Ctrl(char),
    Tab,
    Enter,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Esc,
}

impl Key {
    /// Canonical name, e.g. `"ctrl+c"`, `"tab"`, `"n"`.
    pub fn name(&self) -> String {
        match self {
            Key::Char(' ') => "space".to_string(),
            Key::Char(c) => c.to_string(),
            Key::Ctrl(c) => format!("ctrl+{}", c.to_ascii_lowercase()),
            Key::Tab => "tab".to_string(),
            Key::Enter => "enter".to_string(),
            Key::Backspace => "backspace".to_string(),
            Key::Delete => "delete".to_string(),
            Key::Left => "left".to_string(),
            Key::Right => "right".to_string(),
            Key::Up => "up".to_string(),
            Key::Down => "down".to_string(),
            Key::Home => "home".to_string(),
            Key::End => "end".to_string(),
            Key::Esc => "esc".to_string(),
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Key::Ctrl('c') | Key::Ctrl('C'))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
