use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::focus::FocusTarget;
use crate::tui::component::Component;

/// One-line key hints. The `n` hint names whatever `n` does for the focused pane.
pub struct HelpBar {
    pub focus: FocusTarget,
}

impl HelpBar {
    pub fn new(focus: FocusTarget) -> Self {
        Self { focus }
    }

    pub fn text(&self) -> String {
        let n_hint = match self.focus {
            FocusTarget::Timer => "n: new timer • ",
            FocusTarget::Spinner | FocusTarget::List => "n: new spinner • ",
            FocusTarget::Input => "n: new spinner • enter: add word • ",
        };
        format!("tab: focus next • {n_hint}ctrl+c: exit")
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().fg(Color::DarkGray));
        frame.render_widget(span, area);
    }
}
