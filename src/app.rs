use std::time::{Duration, Instant};

use crate::nav::Navigator;
use crate::theme::ThemeColors;

/// How long a status message stays on screen.
pub const STATUS_TTL: Duration = Duration::from_secs(3);

/// Main application state.
pub struct App {
    pub navigator: Navigator,
    pub theme: ThemeColors,
    pub should_quit: bool,
    pub status_message: Option<(String, Instant)>,
    /// Height of the entry list measured during the last draw.
    pub list_rows: usize,
}

impl App {
    pub fn new(navigator: Navigator, theme: ThemeColors) -> Self {
        Self {
            navigator,
            theme,
            should_quit: false,
            status_message: None,
            list_rows: 1,
        }
    }

    /// Set a status message that auto-clears after [`STATUS_TTL`].
    pub fn set_status_message(&mut self, msg: String) {
        self.status_message = Some((msg, Instant::now()));
    }

    /// Clear status message if it has expired.
    pub fn clear_expired_status(&mut self) {
        if let Some((_, created)) = &self.status_message {
            if created.elapsed() >= STATUS_TTL {
                self.status_message = None;
            }
        }
    }

    /// Message to show in the status bar, if one is live.
    pub fn status_text(&self) -> Option<&str> {
        self.status_message.as_ref().map(|(msg, _)| msg.as_str())
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
