//! # TimerPane Component
//!
//! Shows the countdown as `mm:ss`, or a notice once it has run out.

use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::core::widgets::TimerState;
use crate::tui::component::Component;
use crate::tui::components::pane_block;

pub struct TimerPane<'a> {
    pub timer: &'a TimerState,
    pub focused: bool,
}

impl<'a> TimerPane<'a> {
    pub fn new(timer: &'a TimerState, focused: bool) -> Self {
        Self { timer, focused }
    }
}

/// `mm:ss`, minutes are not capped at 59.
pub fn format_remaining(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

impl Component for TimerPane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (text, style) = if self.timer.timed_out() {
            (
                "Time's up!".to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )
        } else if self.timer.running {
            (format_remaining(self.timer.remaining), Style::default())
        } else {
            (
                format_remaining(self.timer.remaining),
                Style::default().add_modifier(Modifier::DIM),
            )
        };

        let paragraph = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .block(pane_block("Timer", self.focused));
        frame.render_widget(paragraph, area);
    }
}
