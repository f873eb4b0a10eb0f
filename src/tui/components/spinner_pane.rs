use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::widgets::SpinnerState;
use crate::tui::component::Component;
use crate::tui::components::pane_block;

/// Current spinner frame followed by the style name.
pub struct SpinnerPane<'a> {
    pub spinner: &'a SpinnerState,
    pub focused: bool,
}

impl<'a> SpinnerPane<'a> {
    pub fn new(spinner: &'a SpinnerState, focused: bool) -> Self {
        Self { spinner, focused }
    }
}

impl Component for SpinnerPane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(self.spinner.frame(), Style::default().fg(Color::Magenta)),
            Span::raw(" "),
            Span::styled(
                self.spinner.style().name,
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let paragraph = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(pane_block("Spinner", self.focused));
        frame.render_widget(paragraph, area);
    }
}
