pub mod input_line;
pub mod status_row;
pub mod task_list;
pub mod title_bar;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Draw the whole widget
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title bar (1 row) | body | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    title_bar::render_title_bar(frame, app, chunks[0]);

    // Folded: title bar and status row only
    if !app.collapsed {
        let body = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // bordered input line
                Constraint::Min(1),    // task rows
            ])
            .split(chunks[1]);

        input_line::render_input_line(frame, app, body[0]);
        task_list::render_task_list(frame, app, body[1]);
    }

    status_row::render_status_row(frame, app, chunks[2]);
}

/// Pad `used` cells out to `width` with spaces
pub(super) fn padding(used: usize, width: usize) -> String {
    " ".repeat(width.saturating_sub(used))
}
