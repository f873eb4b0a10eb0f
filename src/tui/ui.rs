use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::focus::FocusTarget;
use crate::core::state::State;
use crate::tui::component::Component;
use crate::tui::components::{
    HelpBar, InputField, SpinnerPane, StatusBar, TimerPane, WordList,
};

/// Height of the timer/spinner row, borders included.
const CLOCK_ROW_HEIGHT: u16 = 3;

pub fn draw_ui(frame: &mut Frame, state: &State) {
    use Constraint::{Length, Min, Percentage};
    let layout = Layout::vertical([
        Length(3),
        Min(3),
        Length(CLOCK_ROW_HEIGHT),
        Length(1),
        Length(1),
    ]);
    let [input_area, list_area, clock_area, help_area, status_area] =
        layout.areas(frame.area());
    let [timer_area, spinner_area] =
        Layout::horizontal([Percentage(50), Percentage(50)]).areas(clock_area);

    let focus = state.focus;

    InputField::new(&state.input, focus == FocusTarget::Input).render(frame, input_area);
    WordList::new(&state.list, focus == FocusTarget::List).render(frame, list_area);
    TimerPane::new(&state.timer, focus == FocusTarget::Timer).render(frame, timer_area);
    SpinnerPane::new(&state.spinner, focus == FocusTarget::Spinner).render(frame, spinner_area);
    HelpBar::new(focus).render(frame, help_area);
    StatusBar::new(&state.status).render(frame, status_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Settings;
    use crate::core::update::init;
    use crate::tui::components::{FOCUS_COLOR, buffer_text};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_full_layout_renders_every_pane() {
        let (state, _) = init(Settings::default());
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal.draw(|f| draw_ui(f, &state)).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Word (0/156)"));
        assert!(text.contains("3. Ramen"));
        assert!(text.contains("1. Hamburgers"));
        assert!(text.contains("Timer"));
        assert!(text.contains("Spinner"));
        assert!(text.contains("tab: focus next"));
        assert!(text.contains("Welcome to wordcard!"));
    }

    #[test]
    fn test_only_focused_pane_is_highlighted() {
        let (state, _) = init(Settings::default());
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal.draw(|f| draw_ui(f, &state)).unwrap();

        let buffer = terminal.backend().buffer();
        // Timer is focused at startup; it sits at the left of the clock row.
        let timer_corner = &buffer[(0, 11)];
        assert_eq!(timer_corner.fg, FOCUS_COLOR);
        assert_eq!(timer_corner.symbol(), "┏");

        let input_corner = &buffer[(0, 0)];
        assert_ne!(input_corner.fg, FOCUS_COLOR);
        assert_eq!(input_corner.symbol(), "┌");
    }
}
