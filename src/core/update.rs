//! # Update Loop
//!
//! The reducer. `update` takes the current `State` by value plus one
//! `Event` and hands back the next `State` and the commands to run. It never
//! blocks and never does I/O, so every transition is a plain function call
//! in tests.
//!
//! Global keys are handled here before anything is routed:
//!
//! - `ctrl+c` (and `QuitRequested`) stops the loop, no commands.
//! - `tab` moves focus around the ring. This is the only place focus changes.
//! - `n` restarts the timer when it is focused, otherwise switches the
//!   spinner style. On the input pane the letter is typed as well.
//!
//! Ticks always reach their own widget, focused or not, so the background
//! panes keep running.

use log::{debug, info, warn};

use crate::core::action::{Command, Event};
use crate::core::focus::{self, FocusTarget};
use crate::core::key::Key;
use crate::core::state::{Settings, State};

/// Result of feeding one event to the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue { state: State, commands: Vec<Command> },
    Quit,
}

/// Longest status line produced from a dictionary response.
const STATUS_PREVIEW_CHARS: usize = 120;

/// Seed state plus the commands that get the app going.
pub fn init(settings: Settings) -> (State, Vec<Command>) {
    let state = State::new(settings);
    let (timer, timer_tick) = state.timer.clone().start(state.settings.timer_duration);
    let (spinner, spinner_tick) = state.spinner.clone().start();

    let mut commands: Vec<Command> = timer_tick.into_iter().collect();
    commands.push(spinner_tick);
    commands.push(Command::PrepareDeck {
        deck: state.settings.deck_name.clone(),
    });

    (
        State {
            timer,
            spinner,
            ..state
        },
        commands,
    )
}

pub fn update(mut state: State, event: Event) -> Step {
    let commands = match event {
        Event::QuitRequested => {
            info!("Quit requested");
            return Step::Quit;
        }
        Event::KeyPressed(key) if key.is_quit() => {
            info!("Quit via {}", key);
            return Step::Quit;
        }
        Event::KeyPressed(Key::Tab) => {
            state.focus = state.focus.next();
            debug!("Focus moved to {}", state.focus.label());
            Vec::new()
        }
        Event::KeyPressed(Key::Char('n')) if state.focus == FocusTarget::Timer => {
            let (timer, cmd) = state.timer.start(state.settings.timer_duration);
            state.timer = timer;
            cmd.into_iter().collect()
        }
        Event::KeyPressed(key @ Key::Char('n')) => {
            let (spinner, cmd) = state.spinner.next_style();
            debug!("Spinner style: {}", spinner.style().name);
            state.spinner = spinner;
            let mut commands = vec![cmd];
            if state.focus == FocusTarget::Input {
                let (next, routed) = focus::route_key(state, key);
                state = next;
                commands.extend(routed);
            }
            commands
        }
        Event::KeyPressed(key) => {
            let (next, commands) = focus::route_key(state, key);
            state = next;
            commands
        }
        Event::TimerFired { generation } => {
            let was_running = state.timer.running;
            let (timer, cmd) = state.timer.tick(generation);
            if was_running && !timer.running {
                info!("Timer finished");
            }
            state.timer = timer;
            cmd.into_iter().collect()
        }
        Event::SpinnerFired { generation } => {
            let (spinner, cmd) = state.spinner.tick(generation);
            state.spinner = spinner;
            cmd.into_iter().collect()
        }
        Event::DictionaryResult { term, result } => {
            state.status = match result {
                Ok(body) => format!("{term}: {}", preview(&body)),
                Err(e) => {
                    warn!("Lookup of '{}' failed: {}", term, e);
                    format!("Lookup of '{term}' failed: {e}")
                }
            };
            Vec::new()
        }
        Event::FlashcardResult { front, result } => {
            state.status = match result {
                Ok(()) => format!("Flashcard created for '{front}'"),
                Err(e) => {
                    warn!("Flashcard for '{}' failed: {}", front, e);
                    format!("Flashcard for '{front}' failed: {e}")
                }
            };
            Vec::new()
        }
        Event::DeckReady(result) => {
            state.status = match result {
                Ok(deck) => format!("Deck '{deck}' ready"),
                Err(e) => {
                    warn!("Deck setup failed: {}", e);
                    format!("Deck setup failed: {e}")
                }
            };
            Vec::new()
        }
    };

    Step::Continue { state, commands }
}

/// First non-blank line of a response body, shortened for the status bar.
fn preview(body: &str) -> String {
    let line = body
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("(empty response)");
    if line.chars().count() > STATUS_PREVIEW_CHARS {
        let cut: String = line.chars().take(STATUS_PREVIEW_CHARS - 3).collect();
        format!("{cut}...")
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::widgets::{Entry, InputState};
    use crate::services::ServiceError;
    use std::time::Duration;

    fn seeded() -> State {
        init(Settings::default()).0
    }

    fn cont(step: Step) -> (State, Vec<Command>) {
        match step {
            Step::Continue { state, commands } => (state, commands),
            Step::Quit => panic!("Expected Continue, got Quit"),
        }
    }

    fn key(state: State, k: Key) -> (State, Vec<Command>) {
        cont(update(state, Event::KeyPressed(k)))
    }

    fn with_focus(focus: FocusTarget) -> State {
        State {
            focus,
            ..seeded()
        }
    }

    #[test]
    fn test_init_starts_timer_and_spinner() {
        let (state, cmds) = init(Settings::default());
        assert!(state.timer.running);
        assert_eq!(state.timer.remaining, Duration::from_secs(60));
        assert_eq!(cmds.len(), 3);
        assert!(matches!(cmds[0], Command::StartTimerTick { generation: 1, .. }));
        assert!(matches!(cmds[1], Command::StartSpinnerTick { generation: 1, .. }));
        assert_eq!(
            cmds[2],
            Command::PrepareDeck {
                deck: "test1".to_string()
            }
        );
    }

    #[test]
    fn test_ctrl_c_quits_from_any_focus() {
        let mut state = seeded();
        for _ in 0..4 {
            assert_eq!(
                update(state.clone(), Event::KeyPressed(Key::Ctrl('c'))),
                Step::Quit
            );
            assert_eq!(update(state.clone(), Event::QuitRequested), Step::Quit);
            state = key(state, Key::Tab).0;
        }
    }

    #[test]
    fn test_tab_cycles_focus() {
        let state = seeded();
        let (s1, c1) = key(state, Key::Tab);
        assert_eq!(s1.focus, FocusTarget::Spinner);
        assert!(c1.is_empty());
        let (s2, _) = key(s1, Key::Tab);
        assert_eq!(s2.focus, FocusTarget::List);
        let (s3, _) = key(s2, Key::Tab);
        assert_eq!(s3.focus, FocusTarget::Input);
        let (s4, _) = key(s3, Key::Tab);
        assert_eq!(s4.focus, FocusTarget::Timer);
    }

    #[test]
    fn test_n_on_timer_resets_countdown() {
        let mut state = with_focus(FocusTarget::Timer);
        let g = state.timer.generation;
        state = cont(update(state, Event::TimerFired { generation: g })).0;
        assert_eq!(state.timer.remaining, Duration::from_secs(59));

        let (state, cmds) = key(state, Key::Char('n'));
        assert_eq!(state.timer.remaining, Duration::from_secs(60));
        assert!(state.timer.running);
        assert_eq!(
            cmds,
            vec![Command::StartTimerTick {
                interval: Duration::from_secs(1),
                generation: g + 1
            }]
        );
    }

    #[test]
    fn test_n_elsewhere_switches_spinner_style() {
        for focus in [FocusTarget::Spinner, FocusTarget::List] {
            let state = with_focus(focus);
            let before = state.clone();
            let (state, cmds) = key(state, Key::Char('n'));
            assert_eq!(state.spinner.style_id, 1);
            assert_eq!(state.spinner.frame_index, 0);
            assert!(matches!(cmds.as_slice(), [Command::StartSpinnerTick { .. }]));
            assert_eq!(state.list, before.list);
            assert_eq!(state.timer, before.timer);
        }
    }

    #[test]
    fn test_n_on_input_switches_spinner_and_types() {
        let before = with_focus(FocusTarget::Input);
        let (state, cmds) = key(before.clone(), Key::Char('n'));
        assert_eq!(state.spinner.style_id, 1);
        assert_eq!(state.spinner.frame_index, 0);
        assert!(matches!(cmds.as_slice(), [Command::StartSpinnerTick { .. }]));
        assert_eq!(state.input.buffer, "n");
        assert_eq!(state.timer, before.timer);
        assert_eq!(state.list, before.list);
    }

    #[test]
    fn test_ticks_reach_unfocused_widgets() {
        let state = with_focus(FocusTarget::Input);
        let tg = state.timer.generation;
        let sg = state.spinner.generation;

        let (state, cmds) = cont(update(state, Event::TimerFired { generation: tg }));
        assert_eq!(state.timer.remaining, Duration::from_secs(59));
        assert_eq!(cmds.len(), 1);

        let (state, cmds) = cont(update(state, Event::SpinnerFired { generation: sg }));
        assert_eq!(state.spinner.frame_index, 1);
        assert_eq!(cmds.len(), 1);
        assert_eq!(state.focus, FocusTarget::Input);
    }

    #[test]
    fn test_list_keys_touch_only_list() {
        let before = with_focus(FocusTarget::List);
        let (after, cmds) = key(before.clone(), Key::Char('j'));
        assert!(cmds.is_empty());
        assert_eq!(after.list.selected, 1);
        assert_eq!(after.timer, before.timer);
        assert_eq!(after.spinner, before.spinner);
        assert_eq!(after.input, before.input);
        assert_eq!(after.focus, before.focus);
    }

    #[test]
    fn test_submit_trimmed_word() {
        let mut state = with_focus(FocusTarget::Input);
        state.input = InputState {
            buffer: "  hello  ".to_string(),
            cursor: 9,
        };
        let old_len = state.list.entries.len();

        let (state, cmds) = key(state, Key::Enter);
        assert_eq!(state.list.entries[0], Entry::new("hello"));
        assert_eq!(state.list.entries.len(), old_len + 1);
        assert_eq!(state.list.selected, 0);
        assert!(state.input.buffer.is_empty());
        assert_eq!(cmds.len(), 2);
    }

    #[test]
    fn test_submit_whitespace_still_fires_commands() {
        let mut state = with_focus(FocusTarget::Input);
        state.input = InputState {
            buffer: "   ".to_string(),
            cursor: 3,
        };
        let before = state.clone();

        let (state, cmds) = key(state, Key::Enter);
        assert_eq!(state.list, before.list);
        assert_eq!(state.input, before.input);
        assert_eq!(
            cmds,
            vec![
                Command::DictionaryLookup {
                    term: String::new()
                },
                Command::CreateFlashcard {
                    front: String::new(),
                    back: "back".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_outcomes_only_touch_status() {
        let before = seeded();
        let events = vec![
            Event::DictionaryResult {
                term: "cat".into(),
                result: Ok("\n  a small feline\nmore".into()),
            },
            Event::DictionaryResult {
                term: "cat".into(),
                result: Err(ServiceError::Network("timed out".into())),
            },
            Event::FlashcardResult {
                front: "cat".into(),
                result: Ok(()),
            },
            Event::FlashcardResult {
                front: "cat".into(),
                result: Err(ServiceError::Service("duplicate".into())),
            },
            Event::DeckReady(Ok("test1".into())),
        ];
        let expected = [
            "cat: a small feline",
            "Lookup of 'cat' failed: network error: timed out",
            "Flashcard created for 'cat'",
            "Flashcard for 'cat' failed: service error: duplicate",
            "Deck 'test1' ready",
        ];

        for (event, status) in events.into_iter().zip(expected) {
            let (after, cmds) = cont(update(before.clone(), event));
            assert!(cmds.is_empty());
            assert_eq!(after.status, status);
            assert_eq!(
                State {
                    status: before.status.clone(),
                    ..after
                },
                before
            );
        }
    }

    #[test]
    fn test_preview_truncates() {
        let long = "x".repeat(500);
        let p = preview(&long);
        assert_eq!(p.chars().count(), STATUS_PREVIEW_CHARS);
        assert!(p.ends_with("..."));
        assert_eq!(preview("   \n"), "(empty response)");
    }
}
