use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::model::TaskStatus;
use crate::tui::app::{App, ConfirmAction, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Clear any transient status message on keypress
    app.status_message = None;

    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => app.request_quit(),

        // Fold / unfold
        (_, KeyCode::Char('z')) => {
            app.collapsed = !app.collapsed;
        }

        // Everything below works on the unfolded list only
        _ if app.collapsed => {}

        (_, KeyCode::Char('a')) | (_, KeyCode::Char('i')) | (_, KeyCode::Enter) => {
            app.mode = Mode::Insert;
        }

        (_, KeyCode::Char('j')) | (_, KeyCode::Down) => move_cursor(app, 1),
        (_, KeyCode::Char('k')) | (_, KeyCode::Up) => move_cursor(app, -1),
        (_, KeyCode::Char('g')) | (_, KeyCode::Home) => app.cursor = 0,
        (KeyModifiers::SHIFT, KeyCode::Char('G')) | (_, KeyCode::End) => {
            app.cursor = app.task_count().saturating_sub(1);
        }

        (_, KeyCode::Char('t')) => set_selected_status(app, TaskStatus::Todo),
        (_, KeyCode::Char('d')) => set_selected_status(app, TaskStatus::Complete),
        (_, KeyCode::Char('x')) => set_selected_status(app, TaskStatus::Cancel),

        (KeyModifiers::SHIFT, KeyCode::Char('D')) | (_, KeyCode::Delete) => delete_selected(app),

        (KeyModifiers::SHIFT, KeyCode::Char('C')) => {
            if app.task_count() > 0 {
                app.ask(ConfirmAction::ClearAll);
            }
        }

        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let count = app.task_count();
    if count == 0 {
        app.cursor = 0;
        return;
    }
    let next = app.cursor as isize + delta;
    app.cursor = next.clamp(0, count as isize - 1) as usize;
}

/// Change the selected task's status; the cursor follows it to its new row
pub(super) fn set_selected_status(app: &mut App, status: TaskStatus) {
    let Some(id) = app.selected_id() else {
        return;
    };
    if app.session.set_status_by_id(id, status).is_ok() {
        debug!(%id, %status, "row status changed");
        app.follow(id);
        app.report_save();
    }
}

pub(super) fn delete_selected(app: &mut App) {
    let Some(id) = app.selected_id() else {
        return;
    };
    if let Ok(task) = app.session.remove_by_id(id) {
        app.status_message = Some(format!("deleted \"{}\"", task.text));
        app.clamp_cursor();
        app.report_save();
    }
}
