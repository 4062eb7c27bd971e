use std::os::unix::ffi::OsStrExt;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::nav::{ListSource, Mode, NavState};
use crate::theme::ThemeColors;

/// Entry list for the working directory, showing the viewport's slice of the
/// active listing.
pub struct FileListWidget<'a> {
    state: &'a NavState,
    theme: &'a ThemeColors,
    block: Option<Block<'a>>,
}

impl<'a> FileListWidget<'a> {
    pub fn new(state: &'a NavState, theme: &'a ThemeColors) -> Self {
        Self {
            state,
            theme,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = block.into();
        self
    }

    /// `position/total` for the bottom border; `0/0` when nothing is listed.
    pub fn position_label(state: &NavState) -> String {
        let total = state.active().len();
        if total == 0 {
            "0/0".to_string()
        } else {
            format!("{}/{}", state.viewport().selected + 1, total)
        }
    }

    /// `/query` while a filter is active, with a cursor cell while typing.
    pub fn search_label(state: &NavState, theme: &ThemeColors) -> Option<Line<'static>> {
        if state.source() == ListSource::Full {
            return None;
        }
        let text_style = Style::default()
            .fg(theme.search_fg)
            .add_modifier(Modifier::BOLD);
        let mut spans = vec![Span::styled(format!("/{}", state.query()), text_style)];
        if state.mode() == Mode::Searching {
            let cursor_style = Style::default().bg(theme.search_fg).fg(theme.status_bg);
            spans.push(Span::styled(" ", cursor_style));
        }
        Some(Line::from(spans))
    }
}

impl<'a> Widget for FileListWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner_area = if let Some(block) = self.block {
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        let items = self.state.active();
        let visible_height = inner_area.height as usize;
        if items.is_empty() || visible_height == 0 || inner_area.width == 0 {
            return;
        }

        let viewport = self.state.viewport();
        let range = viewport.visible_range(items.len(), visible_height);

        for (row, idx) in range.enumerate() {
            let y = inner_area.y + row as u16;
            let name = &items[idx];

            let style = if idx == viewport.selected {
                Style::default()
                    .bg(self.theme.selected_bg)
                    .fg(self.theme.selected_fg)
                    .add_modifier(Modifier::BOLD)
            } else if name.as_bytes().starts_with(b".") {
                Style::default().fg(self.theme.hidden_fg)
            } else {
                Style::default().fg(self.theme.list_fg)
            };

            if idx == viewport.selected {
                buf.set_style(Rect::new(inner_area.x, y, inner_area.width, 1), style);
            }
            let line = Line::from(Span::styled(name.to_string_lossy(), style));
            buf.set_line(inner_area.x, y, &line, inner_area.width);
        }
    }
}
