//! # WordList Component
//!
//! Renders the list pane. Rows are numbered from the bottom so the oldest
//! entry keeps number 1 while new words are prepended on top. The selected
//! row is marked with `"> "` and scrolled into view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{List, ListItem, ListState as ScrollState};

use crate::core::widgets::ListState;
use crate::tui::component::Component;
use crate::tui::components::{FOCUS_COLOR, pane_block};

pub const SELECTED_MARKER: &str = "> ";

pub struct WordList<'a> {
    pub list: &'a ListState,
    pub focused: bool,
}

impl<'a> WordList<'a> {
    pub fn new(list: &'a ListState, focused: bool) -> Self {
        Self { list, focused }
    }

    fn items(&self) -> Vec<ListItem<'a>> {
        let total = self.list.entries.len();
        self.list
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| ListItem::new(Line::raw(format!("{}. {}", total - i, entry.word))))
            .collect()
    }
}

impl Component for WordList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let highlight = if self.focused {
            Style::default()
                .fg(FOCUS_COLOR)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let widget = List::new(self.items())
            .block(pane_block("Words", self.focused))
            .highlight_symbol(SELECTED_MARKER)
            .highlight_style(highlight);

        let mut scroll = ScrollState::default();
        if !self.list.entries.is_empty() {
            scroll.select(Some(self.list.selected));
        }
        frame.render_stateful_widget(widget, area, &mut scroll);
    }
}
