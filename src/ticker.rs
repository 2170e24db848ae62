use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::time::Duration;

/// Wait up to `timeout` for the next key press
pub fn next_key_press(timeout: Duration) -> Result<Option<KeyEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(key_press(event::read()?))
}

/// Keep only key presses (ignore key release, repeat, mouse and resize)
fn key_press(event: Event) -> Option<KeyEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(key),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_key_press_filters_event_kinds() {
        assert!(key_press(key(KeyEventKind::Press)).is_some());
        assert!(key_press(key(KeyEventKind::Release)).is_none());
        assert!(key_press(key(KeyEventKind::Repeat)).is_none());
        assert!(key_press(Event::Resize(80, 24)).is_none());
    }
}
