//! Spinner: a rotating frame index over a fixed catalog of styles.
//!
//! Never stops on its own. Every accepted tick schedules the next one at the
//! active style's interval.

use std::time::Duration;

use crate::core::action::Command;

#[derive(Debug)]
pub struct SpinnerStyle {
    pub name: &'static str,
    pub frames: &'static [&'static str],
    pub interval: Duration,
}

pub const STYLES: &[SpinnerStyle] = &[
    SpinnerStyle {
        name: "line",
        frames: &["|", "/", "-", "\\"],
        interval: Duration::from_millis(100),
    },
    SpinnerStyle {
        name: "dot",
        frames: &["⣾ ", "⣽ ", "⣻ ", "⢿ ", "⡿ ", "⣟ ", "⣯ ", "⣷ "],
        interval: Duration::from_millis(100),
    },
    SpinnerStyle {
        name: "mini-dot",
        frames: &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
        interval: Duration::from_millis(83),
    },
    SpinnerStyle {
        name: "jump",
        frames: &["⢄", "⢂", "⢁", "⡁", "⡈", "⡐", "⡠"],
        interval: Duration::from_millis(100),
    },
    SpinnerStyle {
        name: "pulse",
        frames: &["█", "▓", "▒", "░"],
        interval: Duration::from_millis(125),
    },
    SpinnerStyle {
        name: "points",
        frames: &["∙∙∙", "●∙∙", "∙●∙", "∙∙●"],
        interval: Duration::from_millis(142),
    },
    SpinnerStyle {
        name: "globe",
        frames: &["🌍", "🌎", "🌏"],
        interval: Duration::from_millis(250),
    },
    SpinnerStyle {
        name: "moon",
        frames: &["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"],
        interval: Duration::from_millis(125),
    },
    SpinnerStyle {
        name: "monkey",
        frames: &["🙈", "🙉", "🙊"],
        interval: Duration::from_millis(333),
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpinnerState {
    pub frame_index: usize,
    pub style_id: usize,
    pub generation: u64,
}

impl SpinnerState {
    pub fn style(&self) -> &'static SpinnerStyle {
        &STYLES[self.style_id % STYLES.len()]
    }

    pub fn frame(&self) -> &'static str {
        let frames = self.style().frames;
        frames[self.frame_index % frames.len()]
    }

    /// Begin a fresh tick chain with the current style.
    pub fn start(mut self) -> (Self, Command) {
        self.generation += 1;
        let cmd = self.tick_command();
        (self, cmd)
    }

    /// Switch to the next style in the catalog and restart from frame 0.
    pub fn next_style(mut self) -> (Self, Command) {
        self.style_id = (self.style_id + 1) % STYLES.len();
        self.frame_index = 0;
        self.start()
    }

    /// Handle a `SpinnerFired` for `generation`.
    pub fn tick(mut self, generation: u64) -> (Self, Option<Command>) {
        if generation != self.generation {
            return (self, None);
        }
        self.frame_index = (self.frame_index + 1) % self.style().frames.len();
        let cmd = self.tick_command();
        (self, Some(cmd))
    }

    fn tick_command(&self) -> Command {
        Command::StartSpinnerTick {
            interval: self.style().interval,
            generation: self.generation,
        }
    }
}
