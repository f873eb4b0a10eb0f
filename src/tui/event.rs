use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::key::Key;

/// Terminal input the run loop cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Key(Key),
    Resize,
}

/// Poll for an event, waiting at most `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let event = match event::read()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            translate(key_event).map(TuiEvent::Key)
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    };
    Ok(event)
}

/// Poll for an event without blocking.
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Map a crossterm key event onto a core `Key`.
///
/// Release and repeat events are dropped so each physical press is seen once
/// on terminals that report event types.
pub fn translate(key_event: KeyEvent) -> Option<Key> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    let key = match (key_event.modifiers, key_event.code) {
        (m, KeyCode::Char(c)) if m.contains(KeyModifiers::CONTROL) => Key::Ctrl(c),
        (_, KeyCode::Char(c)) => Key::Char(c),
        (_, KeyCode::Tab) => Key::Tab,
        (_, KeyCode::Enter) => Key::Enter,
        (_, KeyCode::Backspace) => Key::Backspace,
        (_, KeyCode::Delete) => Key::Delete,
        (_, KeyCode::Left) => Key::Left,
        (_, KeyCode::Right) => Key::Right,
        (_, KeyCode::Up) => Key::Up,
        (_, KeyCode::Down) => Key::Down,
        (_, KeyCode::Home) => Key::Home,
        (_, KeyCode::End) => Key::End,
        (_, KeyCode::Esc) => Key::Esc,
        _ => return None,
    };
    Some(key)
}
