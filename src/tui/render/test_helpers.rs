use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::model::{MemoList, Task, TaskStatus, UiConfig};
use crate::ops::session::Session;
use crate::tui::app::App;
use crate::util::unicode::display_width;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            // Wide glyphs occupy the next cell(s) too; skip those fillers
            let mut s = String::new();
            let mut skip = 0;
            for cell in row {
                if skip > 0 {
                    skip -= 1;
                    continue;
                }
                s.push_str(cell.symbol());
                skip = display_width(cell.symbol()).saturating_sub(1);
            }
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An App over the given tasks, bound to `memo_data.json` in a fresh temp
/// dir. Nothing is written until the app mutates or quits.
pub fn app_with_tasks(tasks: &[(&str, TaskStatus)]) -> (TempDir, App) {
    let tmp = TempDir::new().unwrap();
    let list = MemoList::from(
        tasks
            .iter()
            .map(|(text, status)| Task::with_status(*text, *status))
            .collect::<Vec<_>>(),
    );
    let session = Session::with_list(list, tmp.path().join("memo_data.json"));
    let app = App::new(session, &UiConfig::default());
    (tmp, app)
}

/// Task texts in display order
pub fn texts(app: &App) -> Vec<&str> {
    app.session.tasks().iter().map(|t| t.text.as_str()).collect()
}
