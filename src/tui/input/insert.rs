use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    app.status_message = None;

    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.mode = Mode::Navigate;
        }
        (_, KeyCode::Enter) => submit(app),

        (_, KeyCode::Backspace) => {
            if let Some(prev) = prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.replace_range(prev..app.input_cursor, "");
                app.input_cursor = prev;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(next) = next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.replace_range(app.input_cursor..next, "");
            }
        }
        (_, KeyCode::Left) => {
            if let Some(prev) = prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(next) = next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = next;
            }
        }
        (_, KeyCode::Home) => app.input_cursor = 0,
        (_, KeyCode::End) => app.input_cursor = app.input.len(),
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            app.input.clear();
            app.input_cursor = 0;
        }

        (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) && !m.contains(KeyModifiers::ALT) => {
            app.input.insert(app.input_cursor, c);
            app.input_cursor += c.len_utf8();
        }

        _ => {}
    }
}

/// Add the typed memo. Blank input is ignored and left as typed.
fn submit(app: &mut App) {
    let Some(id) = app.session.add(&app.input) else {
        return;
    };
    app.input.clear();
    app.input_cursor = 0;
    app.follow(id);
    app.report_save();
}
