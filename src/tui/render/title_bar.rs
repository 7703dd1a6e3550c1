use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::display_width;

use super::padding;

pub const TITLE: &str = "Glass Memo";

/// Render the title bar: name, per-status counts, fold indicator
pub fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.selection_bg;
    let width = area.width as usize;
    let counts = app.session.counts();

    let mut spans = vec![
        Span::styled(
            format!(" {} ", TITLE),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(counts.summary(), Style::default().fg(app.theme.text).bg(bg)),
    ];

    let indicator = if app.collapsed { " \u{25B2} " } else { " \u{25BC} " };
    let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let indicator_width = display_width(indicator);
    if used + indicator_width <= width {
        spans.push(Span::styled(
            padding(used + indicator_width, width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            indicator,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
