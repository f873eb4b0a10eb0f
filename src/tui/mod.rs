//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders `State`, turns
//! keyboard input into `Event::KeyPressed` and hands every `Command` the
//! reducer returns to the `Executor`.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loop
//!
//! Keys and background results share one inbound queue: the loop pushes each
//! key it reads into the same channel the executor's tasks send on. Each pass
//! draws (only if something changed), waits briefly for a key, queues every
//! pending key, then drains the channel. Events reach `core::update` one at a
//! time in the order they were queued.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic while the spinner
//! forces continuous redraws.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::{self, stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::core::action::{Command, Event};
use crate::core::config::ResolvedConfig;
use crate::core::key::Key;
use crate::core::state::{Settings, State};
use crate::core::update::{self, Step};
use crate::services::{
    AnkiConnect, CollinsDictionary, Dictionary, Executor, Flashcards, Timeouts,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Longest the loop waits for a key before checking background events.
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), Show, SetCursorStyle::SteadyBlock)?;
        info!("Terminal modes enabled (steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), SetCursorStyle::DefaultUserShape, Hide);
    }
}

/// Build the dictionary and flashcard clients from a resolved config.
pub fn build_services(config: &ResolvedConfig) -> (Arc<dyn Dictionary>, Arc<dyn Flashcards>) {
    if config.dictionary_api_key.is_none() {
        warn!("No dictionary API key configured; lookups will fail");
    }
    let dictionary = CollinsDictionary::new(
        config.dictionary_base_url.clone(),
        config.dictionary_name.clone(),
        config.dictionary_api_key.clone(),
    );
    let flashcards = AnkiConnect::new(
        config.anki_connect_url.clone(),
        config.deck_name.clone(),
        config.model_name.clone(),
    )
    .with_tags(config.tags.clone())
    .with_allow_duplicate(config.allow_duplicate);

    (Arc::new(dictionary), Arc::new(flashcards))
}

/// Run the app until the user quits. Must be called inside a tokio runtime.
pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let (dictionary, flashcards) = build_services(&config);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let executor = Executor::new(
        dictionary,
        flashcards,
        Timeouts::from_config(&config),
        tx.clone(),
    );

    let (state, commands) = update::init(Settings::from_config(&config));
    dispatch_all(&executor, commands);

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Failed to set terminal modes: {}", e))
        .ok();

    let result = event_loop(&mut terminal, state, &executor, &tx, &mut rx);

    drop(terminal_mode_guard);
    ratatui::restore();
    info!("Terminal restored");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    mut state: State,
    executor: &Executor,
    inbox: &UnboundedSender<Event>,
    rx: &mut UnboundedReceiver<Event>,
) -> io::Result<()> {
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &state))?;
            needs_redraw = false;
        }

        let mut next = poll_event_timeout(POLL_TIMEOUT)?;
        while let Some(tui_event) = next {
            match tui_event {
                TuiEvent::Key(key) => queue_key(inbox, key),
                TuiEvent::Resize => needs_redraw = true,
            }
            next = poll_event_immediate()?;
        }

        for event in drain(rx) {
            needs_redraw = true;
            match update::update(state, event) {
                Step::Quit => {
                    info!("Shutting down");
                    return Ok(());
                }
                Step::Continue {
                    state: next_state,
                    commands,
                } => {
                    state = next_state;
                    dispatch_all(executor, commands);
                }
            }
        }
    }
}

/// Put a key on the inbound queue behind anything already delivered.
fn queue_key(inbox: &UnboundedSender<Event>, key: Key) {
    if inbox.send(Event::KeyPressed(key)).is_err() {
        warn!("Failed to queue {}: receiver dropped", key);
    }
}

/// Everything queued so far, in delivery order.
fn drain(rx: &mut UnboundedReceiver<Event>) -> Vec<Event> {
    std::iter::from_fn(|| rx.try_recv().ok()).collect()
}

fn dispatch_all(executor: &Executor, commands: Vec<Command>) {
    if !commands.is_empty() {
        debug!("Dispatching {} command(s)", commands.len());
    }
    for command in commands {
        executor.dispatch(command);
    }
}
