use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::nav::preview::{PreviewError, PreviewState};
use crate::theme::ThemeColors;

/// Preview panel for the selected entry.
pub struct PreviewWidget<'a> {
    preview_state: &'a PreviewState,
    theme: &'a ThemeColors,
    block: Option<Block<'a>>,
}

impl<'a> PreviewWidget<'a> {
    pub fn new(preview_state: &'a PreviewState, theme: &'a ThemeColors) -> Self {
        Self {
            preview_state,
            theme,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = block.into();
        self
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let label = Style::default()
            .fg(self.theme.preview_label_fg)
            .add_modifier(Modifier::BOLD);
        let body = Style::default().fg(self.theme.preview_fg);

        match self.preview_state {
            PreviewState::Unavailable => vec![Line::from(Span::styled(
                "No preview",
                Style::default().fg(self.theme.dim_fg),
            ))],
            PreviewState::File { path, info } => {
                let mut lines = vec![Line::from(Span::styled(
                    format!("File: {}", path.display()),
                    label,
                ))];
                match info {
                    Ok(info) => lines.extend(
                        info.lines()
                            .into_iter()
                            .map(|l| Line::from(Span::styled(l, body))),
                    ),
                    Err(err) => lines.push(self.error_line(err)),
                }
                lines
            }
            PreviewState::Directory { path, children } => {
                let mut lines = vec![Line::from(Span::styled(
                    format!("Directory: {}", path.display()),
                    label,
                ))];
                match children {
                    Ok(children) => lines.extend(
                        children
                            .iter()
                            .map(|c| Line::from(Span::styled(format!("> {c}"), body))),
                    ),
                    Err(err) => lines.push(self.error_line(err)),
                }
                lines
            }
        }
    }

    fn error_line(&self, err: &PreviewError) -> Line<'a> {
        Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(self.theme.error_fg),
        ))
    }
}

impl<'a> Widget for PreviewWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Render block (border) first, get inner area
        let inner = if let Some(block) = &self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        for (i, line) in self
            .lines()
            .iter()
            .take(inner.height as usize)
            .enumerate()
        {
            buf.set_line(inner.x, inner.y + i as u16, line, inner.width);
        }
    }
}
