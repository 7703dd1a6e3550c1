use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode};
use crate::util::unicode::{display_width, scroll_start_for_cursor, truncate_to_width};

pub const PLACEHOLDER: &str = "type a memo...";

/// Render the bordered new-memo line. Places the terminal cursor while typing.
pub fn render_input_line(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let typing = app.mode == Mode::Insert;
    let border = if typing { app.theme.highlight } else { app.theme.dim };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border).bg(bg))
        .title(Span::styled(" new memo ", Style::default().fg(border).bg(bg)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let line = if app.input.is_empty() && !typing {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        // Scroll horizontally so the cursor stays in view
        let start = scroll_start_for_cursor(&app.input, app.input_cursor, width);
        let visible = truncate_to_width(&app.input[start..], width);
        if typing && inner.height > 0 {
            let col = display_width(&app.input[start..app.input_cursor]) as u16;
            frame.set_cursor_position((inner.x + col.min(inner.width.saturating_sub(1)), inner.y));
        }
        Line::from(Span::styled(
            visible,
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
    };

    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), inner);
}
