use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::editor::Editor;
use crate::error::Result;
use crate::nav::{Mode, NavEvent, Outcome};

/// Handle a key event.
pub fn handle_key_event(app: &mut App, key: KeyEvent, editor: &mut dyn Editor) -> Result<()> {
    let Some(event) = map_key(app.navigator.state().mode(), key) else {
        return Ok(());
    };

    let outcome = app.navigator.handle(event, app.list_rows, editor)?;
    if outcome == Outcome::Quit {
        app.quit();
    }
    if let Some(notice) = app.navigator.take_notice() {
        app.set_status_message(notice);
    }
    Ok(())
}

/// Translate a key press into a navigation event for the current mode.
pub fn map_key(mode: Mode, key: KeyEvent) -> Option<NavEvent> {
    match mode {
        Mode::Browsing => map_browsing_key(key),
        Mode::Searching => map_search_key(key),
    }
}

fn map_browsing_key(key: KeyEvent) -> Option<NavEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(NavEvent::Quit),
            _ => None,
        };
    }

    let event = match key.code {
        KeyCode::Down | KeyCode::Char('j') => NavEvent::MoveDown,
        KeyCode::Up | KeyCode::Char('k') => NavEvent::MoveUp,
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => NavEvent::Activate,
        KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => NavEvent::Ascend,
        KeyCode::Char('/') => NavEvent::EnterSearch,
        KeyCode::Char('c') => NavEvent::ClearFilter,
        KeyCode::Char('.') => NavEvent::ToggleHidden,
        KeyCode::Char('q') | KeyCode::Esc => NavEvent::Quit,
        _ => return None,
    };
    Some(event)
}

fn map_search_key(key: KeyEvent) -> Option<NavEvent> {
    let event = match key.code {
        KeyCode::Enter | KeyCode::Esc => NavEvent::Confirm,
        KeyCode::Backspace => NavEvent::Backspace,
        KeyCode::Down => NavEvent::MoveDown,
        KeyCode::Up => NavEvent::MoveUp,
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            NavEvent::Input(c)
        }
        _ => return None,
    };
    Some(event)
}
