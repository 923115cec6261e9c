use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::{Action, Key};

/// Poll for an event with timeout (blocks up to `timeout`).
pub fn poll_event_timeout(timeout: Duration) -> std::io::Result<Option<Action>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(translate(event::read()?))
}

/// Poll for an event without blocking (returns immediately).
pub fn poll_event_immediate() -> std::io::Result<Option<Action>> {
    poll_event_timeout(Duration::ZERO)
}

fn translate(event: Event) -> Option<Action> {
    match event {
        Event::Key(key_event) => {
            log::trace!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event).map(Action::Key)
        }
        Event::Resize(width, height) => Some(Action::Resize(width, height)),
        _ => None,
    }
}

/// Map a terminal key to a logical key, resolving aliases.
pub fn map_key(key_event: KeyEvent) -> Option<Key> {
    // Some terminals also report releases and repeats.
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Key::Terminate),
        (_, KeyCode::Up | KeyCode::Char('k' | 'w')) => Some(Key::Up),
        (_, KeyCode::Down | KeyCode::Char('j' | 's')) => Some(Key::Down),
        (_, KeyCode::Left | KeyCode::Char('h' | 'a')) => Some(Key::Left),
        (_, KeyCode::Right | KeyCode::Char('l' | 'd')) => Some(Key::Right),
        (_, KeyCode::Enter | KeyCode::Char(' ')) => Some(Key::Select),
        (_, KeyCode::Esc) => Some(Key::Back),
        (_, KeyCode::Char('q')) => Some(Key::Quit),
        _ => None,
    }
}
