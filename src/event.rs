use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

use crate::error::Result;

/// Application events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key press event.
    Key(KeyEvent),
    /// Terminal resize event.
    Resize(u16, u16),
}

/// Blocking input source; nothing else runs while it waits.
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Wait for the next key press or resize. Other terminal events are dropped.
    pub fn next(&mut self) -> Result<Event> {
        loop {
            if let Some(event) = Self::translate(event::read()?) {
                return Ok(event);
            }
        }
    }

    fn translate(raw: CrosstermEvent) -> Option<Event> {
        match raw {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
            CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn key_presses_are_forwarded() {
        let key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(
            EventHandler::translate(CrosstermEvent::Key(key)),
            Some(Event::Key(key))
        );
    }

    #[test]
    fn key_releases_are_dropped() {
        let key = KeyEvent {
            code: KeyCode::Char('j'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(EventHandler::translate(CrosstermEvent::Key(key)), None);
    }

    #[test]
    fn resize_is_forwarded() {
        assert_eq!(
            EventHandler::translate(CrosstermEvent::Resize(80, 24)),
            Some(Event::Resize(80, 24))
        );
    }

    #[test]
    fn focus_events_are_dropped() {
        assert_eq!(EventHandler::translate(CrosstermEvent::FocusGained), None);
    }
}
