//! Single-line text field.
//!
//! `cursor` is a byte offset into `buffer` and always sits on a char
//! boundary in `0..=buffer.len()`. Enter never reaches this widget; the focus
//! router takes the text out with `take_submission` instead.

use crate::core::key::Key;

/// Maximum number of characters the field accepts.
pub const CHAR_LIMIT: usize = 156;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputState {
    pub buffer: String,
    pub cursor: usize,
}

impl InputState {
    pub fn handle_key(mut self, key: Key) -> Self {
        match key {
            Key::Char(c) => {
                if self.buffer.chars().count() < CHAR_LIMIT {
                    self.buffer.insert(self.cursor, c);
                    self.cursor += c.len_utf8();
                }
            }
            Key::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                }
            }
            Key::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                }
            }
            Key::Left => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                }
            }
            Key::Right => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
            }
            Key::Home | Key::Ctrl('a') => self.cursor = 0,
            Key::End | Key::Ctrl('e') => self.cursor = self.buffer.len(),
            Key::Ctrl('w') => {
                let start = prev_word_boundary(&self.buffer, self.cursor);
                self.buffer.drain(start..self.cursor);
                self.cursor = start;
            }
            Key::Ctrl('u') => {
                self.buffer.drain(..self.cursor);
                self.cursor = 0;
            }
            Key::Ctrl('k') => self.buffer.truncate(self.cursor),
            _ => {}
        }
        self
    }

    /// Trim the buffer and hand back the text.
    ///
    /// A non-empty result clears the field; an all-whitespace buffer is left
    /// exactly as it was.
    pub fn take_submission(self) -> (Self, String) {
        let text = self.buffer.trim().to_string();
        if text.is_empty() {
            (self, text)
        } else {
            (Self::default(), text)
        }
    }
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Readline `backward-word`: skip non-word chars, then the word itself.
fn prev_word_boundary(text: &str, pos: usize) -> usize {
    let mut chars = text[..pos].char_indices().rev().peekable();

    while chars.peek().is_some_and(|&(_, c)| !is_word_char(c)) {
        chars.next();
    }

    let mut boundary = 0;
    while let Some(&(i, c)) = chars.peek() {
        if !is_word_char(c) {
            boundary = i + c.len_utf8();
            break;
        }
        boundary = i;
        chars.next();
    }
    boundary
}
