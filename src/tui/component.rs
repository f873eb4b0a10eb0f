use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive everything they draw as props (struct fields) taken
/// from core `State`, and render to a `Frame` within a given `Rect`. They
/// never mutate core state; all changes go through `core::update`.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
