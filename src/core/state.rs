//! # Application State
//!
//! All of wordcard's state in one value. No TUI types live here.
//!
//! ```text
//! State
//! ├── focus: FocusTarget     // pane receiving non-global keys
//! ├── timer: TimerState      // countdown
//! ├── spinner: SpinnerState  // animation frame + style
//! ├── list: ListState        // submitted words, newest first
//! ├── input: InputState      // text field
//! ├── status: String         // last command outcome
//! └── settings: Settings     // fixed for the lifetime of the process
//! ```
//!
//! A new `State` only comes out of `update(state, event)` in update.rs.
//! Nothing else assigns one, so there are no surprise mutations.

use std::time::Duration;

use crate::core::config::ResolvedConfig;
use crate::core::focus::FocusTarget;
use crate::core::widgets::{Entry, InputState, ListState, SpinnerState, TimerState};

/// Words shown before anything has been submitted.
pub const SEED_WORDS: &[&str] = &["Ramen", "Tomato Soup", "Hamburgers"];

/// Values the reducer needs from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub timer_duration: Duration,
    pub timer_interval: Duration,
    pub deck_name: String,
    pub back_placeholder: String,
}

impl Settings {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            timer_duration: config.timer_duration,
            timer_interval: config.timer_interval,
            deck_name: config.deck_name.clone(),
            back_placeholder: config.back_placeholder.clone(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&ResolvedConfig::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub focus: FocusTarget,
    pub timer: TimerState,
    pub spinner: SpinnerState,
    pub list: ListState,
    pub input: InputState,
    pub status: String,
    pub settings: Settings,
}

impl State {
    /// Seed state: timer focused but not yet started, spinner on its first style.
    pub fn new(settings: Settings) -> Self {
        Self {
            focus: FocusTarget::default(),
            timer: TimerState::new(settings.timer_interval),
            spinner: SpinnerState::default(),
            list: ListState::new(SEED_WORDS.iter().copied().map(Entry::new).collect()),
            input: InputState::default(),
            status: String::from("Welcome to wordcard!"),
            settings,
        }
    }
}
