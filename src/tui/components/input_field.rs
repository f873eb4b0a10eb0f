//! # InputField Component
//!
//! Single-line text field. When focused it also places the terminal cursor,
//! measured in display columns with `unicode-width` so wide characters line
//! up. Text that does not fit is scrolled horizontally to keep the cursor in
//! view.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::widgets::InputState;
use crate::core::widgets::input::CHAR_LIMIT;
use crate::tui::component::Component;
use crate::tui::components::pane_block;

const PLACEHOLDER: &str = "Type a word and press enter";

pub struct InputField<'a> {
    pub input: &'a InputState,
    pub focused: bool,
}

impl<'a> InputField<'a> {
    pub fn new(input: &'a InputState, focused: bool) -> Self {
        Self { input, focused }
    }
}

/// Byte offset where the visible window starts so the cursor fits in `width` columns.
pub fn scroll_start(buffer: &str, cursor: usize, width: usize) -> usize {
    if width == 0 {
        return cursor;
    }
    let mut start = 0;
    while buffer[start..cursor].width() >= width {
        match buffer[start..].chars().next() {
            Some(c) => start += c.len_utf8(),
            None => break,
        }
    }
    start
}

impl Component for InputField<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = format!(
            "Word ({}/{})",
            self.input.buffer.chars().count(),
            CHAR_LIMIT
        );
        let block = pane_block(&title, self.focused);
        let inner = block.inner(area);

        if self.input.buffer.is_empty() {
            let placeholder =
                Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray));
            frame.render_widget(placeholder.block(block), area);
            if self.focused {
                frame.set_cursor_position(Position::new(inner.x, inner.y));
            }
            return;
        }

        let buffer = self.input.buffer.as_str();
        let cursor = self.input.cursor.min(buffer.len());
        let start = scroll_start(buffer, cursor, inner.width as usize);

        frame.render_widget(Paragraph::new(&buffer[start..]).block(block), area);

        if self.focused {
            let column = buffer[start..cursor].width() as u16;
            frame.set_cursor_position(Position::new(inner.x + column, inner.y));
        }
    }
}
