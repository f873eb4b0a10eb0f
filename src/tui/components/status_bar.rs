use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

/// Bottom line showing the last outcome reported by the update loop.
pub struct StatusBar<'a> {
    pub status: &'a str,
}

impl<'a> StatusBar<'a> {
    pub fn new(status: &'a str) -> Self {
        Self { status }
    }
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Multi-line bodies would spill over the help line.
        let line = self.status.lines().next().unwrap_or_default();
        frame.render_widget(Span::raw(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_renders_first_line_only() {
        let mut terminal = Terminal::new(TestBackend::new(40, 2)).unwrap();
        terminal
            .draw(|f| StatusBar::new("Deck 'test1' ready\nsecond").render(f, f.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Deck 'test1' ready"));
        assert!(!text.contains("second"));
    }
}
