//! # Events and Commands
//!
//! Everything that can happen in wordcard becomes an `Event`.
//! User presses a key? That's `Event::KeyPressed(key)`.
//! The dictionary answers? That's `Event::DictionaryResult { .. }`.
//!
//! Everything the app wants done in the outside world becomes a `Command`.
//! Commands are plain data. The executor in `services::executor` runs them
//! off the loop and reports each outcome back as exactly one `Event`.
//!
//! ```text
//! State + Event  →  update()  →  State' + [Command]
//!                                            │
//!             Event  ←  executor  ←──────────┘
//! ```

use std::time::Duration;

use crate::core::key::Key;
use crate::services::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    KeyPressed(Key),
    /// A timer tick scheduled by `Command::StartTimerTick` elapsed.
    TimerFired { generation: u64 },
    /// A spinner tick scheduled by `Command::StartSpinnerTick` elapsed.
    SpinnerFired { generation: u64 },
    DictionaryResult {
        term: String,
        result: Result<String, ServiceError>,
    },
    FlashcardResult {
        front: String,
        result: Result<(), ServiceError>,
    },
    DeckReady(Result<String, ServiceError>),
    QuitRequested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    StartTimerTick { interval: Duration, generation: u64 },
    StartSpinnerTick { interval: Duration, generation: u64 },
    DictionaryLookup { term: String },
    CreateFlashcard { front: String, back: String },
    PrepareDeck { deck: String },
}

impl Command {
    /// Short label for log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Command::StartTimerTick { .. } => "timer-tick",
            Command::StartSpinnerTick { .. } => "spinner-tick",
            Command::DictionaryLookup { .. } => "dictionary-lookup",
            Command::CreateFlashcard { .. } => "create-flashcard",
            Command::PrepareDeck { .. } => "prepare-deck",
        }
    }
}
