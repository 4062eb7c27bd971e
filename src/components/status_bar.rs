use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::nav::Mode;
use crate::theme::ThemeColors;

const BROWSE_HINTS: &str = " j/k:move  l:open  h:up  /:search  c:clear  .:hide  q:quit ";
const BROWSE_HINTS_HIDDEN_OFF: &str = " j/k:move  l:open  h:up  /:search  c:clear  .:show  q:quit ";
const SEARCH_HINTS: &str = " type to filter  Enter:done  Bksp:delete ";

/// One-line status bar: mode and key hints, or a transient status message.
pub struct StatusBarWidget<'a> {
    mode: Mode,
    theme: &'a ThemeColors,
    status_message: Option<&'a str>,
    show_hidden: bool,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(mode: Mode, theme: &'a ThemeColors) -> Self {
        Self {
            mode,
            theme,
            status_message: None,
            show_hidden: true,
        }
    }

    /// Whether dot-files are currently listed; picks the `.` hint.
    pub fn show_hidden(mut self, show: bool) -> Self {
        self.show_hidden = show;
        self
    }

    pub fn status_message(mut self, msg: Option<&'a str>) -> Self {
        self.status_message = msg;
        self
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let width = area.width as usize;
        let base = Style::default()
            .bg(self.theme.status_bg)
            .fg(self.theme.status_fg);
        buf.set_style(Rect::new(area.x, area.y, area.width, 1), base);

        // Status messages are failures surfaced from the navigator.
        if let Some(msg) = self.status_message {
            let style = Style::default()
                .bg(self.theme.error_fg)
                .fg(self.theme.status_bg);
            let display = format!("{:<width$}", msg, width = width);
            let line = Line::from(Span::styled(display, style));
            buf.set_line(area.x, area.y, &line, area.width);
            return;
        }

        let (label, hints) = match self.mode {
            Mode::Browsing if self.show_hidden => (" BROWSE ", BROWSE_HINTS),
            Mode::Browsing => (" BROWSE ", BROWSE_HINTS_HIDDEN_OFF),
            Mode::Searching => (" SEARCH ", SEARCH_HINTS),
        };
        let label_style = Style::default()
            .bg(self.theme.search_fg)
            .fg(self.theme.status_bg)
            .add_modifier(Modifier::BOLD);
        let hints_style = base.fg(self.theme.dim_fg);

        let pad = width
            .saturating_sub(label.chars().count())
            .saturating_sub(hints.chars().count());
        let line = Line::from(vec![
            Span::styled(label, label_style),
            Span::styled(" ".repeat(pad), base),
            Span::styled(hints, hints_style),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
