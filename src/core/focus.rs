//! # Focus
//!
//! Which pane receives non-global keys, and the router that hands a key to
//! that pane. Only `update` changes the focus; this module only reads it.

use crate::core::action::Command;
use crate::core::key::Key;
use crate::core::state::State;
use crate::core::widgets::Entry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    Timer,
    Spinner,
    List,
    Input,
}

impl FocusTarget {
    /// Ring order: Timer → Spinner → List → Input → Timer.
    pub fn next(self) -> Self {
        match self {
            FocusTarget::Timer => FocusTarget::Spinner,
            FocusTarget::Spinner => FocusTarget::List,
            FocusTarget::List => FocusTarget::Input,
            FocusTarget::Input => FocusTarget::Timer,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FocusTarget::Timer => "timer",
            FocusTarget::Spinner => "spinner",
            FocusTarget::List => "list",
            FocusTarget::Input => "input",
        }
    }
}

/// Forward a non-global key to the focused widget.
///
/// Exactly one widget field of `state` is replaced. Enter on the input pane
/// is intercepted here and turned into a submission.
pub fn route_key(mut state: State, key: Key) -> (State, Vec<Command>) {
    match state.focus {
        // Neither timer nor spinner react to keys; their ticks arrive as
        // separate events.
        FocusTarget::Timer | FocusTarget::Spinner => (state, Vec::new()),
        FocusTarget::List => {
            state.list = state.list.handle_key(key);
            (state, Vec::new())
        }
        FocusTarget::Input if key == Key::Enter => submit(state),
        FocusTarget::Input => {
            state.input = state.input.handle_key(key);
            (state, Vec::new())
        }
    }
}

/// Record the typed word and fire off the lookup and flashcard commands.
///
/// Both commands go out even when the trimmed text is empty.
fn submit(mut state: State) -> (State, Vec<Command>) {
    let (input, text) = state.input.take_submission();
    state.input = input;
    if !text.is_empty() {
        state.list = state.list.prepend(Entry::new(text.clone()));
    }

    let commands = vec![
        Command::DictionaryLookup { term: text.clone() },
        Command::CreateFlashcard {
            front: text,
            back: state.settings.back_placeholder.clone(),
        },
    ];
    (state, commands)
}
