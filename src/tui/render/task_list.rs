use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::Task;
use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

use super::padding;

pub const EMPTY_HINT: &str = "nothing here yet. press a to add a memo";

/// Render the task rows, scrolling to keep the cursor visible
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.session.tasks().is_empty() {
        let empty = Paragraph::new(format!(" {}", EMPTY_HINT))
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, inner);
        return;
    }

    let visible_height = inner.height as usize;
    app.clamp_cursor();
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if visible_height > 0 && app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }

    let width = inner.width as usize;
    let lines: Vec<Line> = app
        .session
        .tasks()
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
        .map(|(i, task)| task_line(app, task, i == app.cursor, width))
        .collect();

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);
}

/// One row: `> [x] text ........ complete `
fn task_line<'a>(app: &App, task: &Task, is_cursor: bool, width: usize) -> Line<'a> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let color = app.theme.status_color(task.status);

    let pointer = if is_cursor { "\u{25B8} " } else { "  " };
    let marker = format!("{} ", task.status.marker());
    let label = format!(" {} ", task.status);

    let fixed = display_width(pointer) + display_width(&marker) + display_width(&label);
    let text = truncate_to_width(&task.text, width.saturating_sub(fixed));

    let mut text_style = Style::default().fg(color).bg(bg);
    if is_cursor {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }
    if !task.status.is_pending() {
        text_style = text_style.add_modifier(Modifier::DIM);
    }

    let used = fixed + display_width(&text);
    Line::from(vec![
        Span::styled(pointer, Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(marker, Style::default().fg(color).bg(bg)),
        Span::styled(text, text_style),
        Span::styled(padding(used, width), Style::default().bg(bg)),
        Span::styled(label, Style::default().fg(app.theme.dim).bg(bg)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskStatus;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn empty_list_shows_hint() {
        let (_tmp, mut app) = app_with_tasks(&[]);
        let output = render_to_string(TERM_W, 5, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert!(output.contains(EMPTY_HINT));
    }

    #[test]
    fn rows_show_marker_text_and_status() {
        let (_tmp, mut app) = app_with_tasks(&[
            ("buy milk", TaskStatus::Todo),
            ("写周报", TaskStatus::Complete),
            ("call bob", TaskStatus::Cancel),
        ]);
        let output = render_to_string(40, 5, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        let rows: Vec<&str> = output.lines().collect();
        assert!(rows[1].contains("\u{25B8} [ ] buy milk"));
        assert!(rows[1].trim_end_matches('│').trim_end().ends_with("todo"));
        assert!(rows[2].contains("[x] 写周报"));
        assert!(rows[2].contains("complete"));
        assert!(rows[3].contains("[-] call bob"));
        assert!(rows[3].contains("cancel"));
    }

    #[test]
    fn long_text_is_truncated() {
        let long = "a very long memo that will never fit in a narrow terminal";
        let (_tmp, mut app) = app_with_tasks(&[(long, TaskStatus::Todo)]);
        let output = render_to_string(30, 3, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert!(output.contains('\u{2026}'));
        assert!(output.contains("todo"));
    }

    #[test]
    fn scrolls_to_keep_cursor_visible() {
        let tasks: Vec<(String, TaskStatus)> = (0..10)
            .map(|i| (format!("task {}", i), TaskStatus::Todo))
            .collect();
        let refs: Vec<(&str, TaskStatus)> =
            tasks.iter().map(|(t, s)| (t.as_str(), *s)).collect();
        let (_tmp, mut app) = app_with_tasks(&refs);
        app.cursor = 8;
        // 3 rows inside the borders
        let output = render_to_string(TERM_W, 5, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(app.scroll_offset, 6);
        assert!(output.contains("task 8"));
        assert!(!output.contains("task 5"));
    }
}
