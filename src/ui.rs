use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders},
    Frame,
};

use crate::app::App;
use crate::components::file_list::FileListWidget;
use crate::components::preview::PreviewWidget;
use crate::components::status_bar::StatusBarWidget;

/// Split the screen into (entry list, preview, status bar).
fn layout(area: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    (panes[0], panes[1], rows[1])
}

/// Render the application UI.
pub fn render(app: &mut App, frame: &mut Frame) {
    app.clear_expired_status();
    let (list_area, preview_area, status_area) = layout(frame.area());
    let theme = &app.theme;
    let border = Style::default().fg(theme.border_fg);

    let mut list_block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {} ", app.navigator.state().cwd().display()));

    // Keep the selected row on screen for the height actually drawn.
    app.list_rows = list_block.inner(list_area).height as usize;
    app.navigator.fit_viewport(app.list_rows);

    let state = app.navigator.state();
    if let Some(label) = FileListWidget::search_label(state, theme) {
        list_block = list_block.title_bottom(label.left_aligned());
    }
    list_block = list_block
        .title_bottom(Line::from(FileListWidget::position_label(state)).right_aligned());

    frame.render_widget(
        FileListWidget::new(state, theme).block(list_block),
        list_area,
    );

    let preview_block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(" Preview ");
    frame.render_widget(
        PreviewWidget::new(app.navigator.preview(), theme).block(preview_block),
        preview_area,
    );

    frame.render_widget(
        StatusBarWidget::new(state.mode(), theme)
            .show_hidden(state.show_hidden())
            .status_message(app.status_text()),
        status_area,
    );
}
