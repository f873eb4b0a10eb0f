//! # TUI Components
//!
//! One component per pane. Every component is stateless: it receives the
//! slice of core `State` it draws as props and renders it. Focus is passed in
//! as a plain `bool` so the components never need to know about the ring.
//!
//! ```text
//! components/
//! ├── mod.rs          (this file, shared pane chrome)
//! ├── input_field.rs  (text entry with cursor)
//! ├── word_list.rs    (numbered word list)
//! ├── timer_pane.rs   (countdown)
//! ├── spinner_pane.rs (animated spinner)
//! ├── help_bar.rs     (key hints)
//! └── status_bar.rs   (last outcome)
//! ```

pub mod help_bar;
pub mod input_field;
pub mod spinner_pane;
pub mod status_bar;
pub mod timer_pane;
pub mod word_list;

pub use help_bar::HelpBar;
pub use input_field::InputField;
pub use spinner_pane::SpinnerPane;
pub use status_bar::StatusBar;
pub use timer_pane::TimerPane;
pub use word_list::WordList;

use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType};

/// Border color of the focused pane.
pub const FOCUS_COLOR: Color = Color::Indexed(69);

/// Bordered block shared by all panes; the focused one gets a thick colored border.
pub fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let block = Block::bordered().title(title);
    if focused {
        block
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(FOCUS_COLOR))
    } else {
        block
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(Color::DarkGray))
    }
}

#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
