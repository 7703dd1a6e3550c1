use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, ConfirmAction, Mode};
use crate::util::count_noun;

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            let action = app.confirm.take();
            app.mode = Mode::Navigate;
            match action {
                Some(ConfirmAction::ClearAll) => confirm_clear_all(app),
                Some(ConfirmAction::Quit) => app.finish(),
                None => {}
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.confirm = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}

fn confirm_clear_all(app: &mut App) {
    let removed = app.session.clear();
    app.cursor = 0;
    app.scroll_offset = 0;
    app.status_message = Some(format!("cleared {}", count_noun(removed, "task")));
    app.report_save();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskStatus;
    use crate::tui::input::handle_key;
    use crate::tui::input::test_keys::*;
    use crate::tui::render::test_helpers::{app_with_tasks, texts};

    #[test]
    fn yes_clears_everything() {
        let (tmp, mut app) = app_with_tasks(&[
            ("a", TaskStatus::Todo),
            ("b", TaskStatus::Complete),
        ]);
        handle_key(&mut app, ch('C'));
        handle_key(&mut app, ch('y'));

        assert!(texts(&app).is_empty());
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.status_message.as_deref(), Some("cleared 2 tasks"));
        let saved = std::fs::read_to_string(tmp.path().join("memo_data.json")).unwrap();
        assert_eq!(saved.trim(), "[]");
    }

    #[test]
    fn no_keeps_tasks() {
        let (_tmp, mut app) = app_with_tasks(&[("a", TaskStatus::Todo)]);
        handle_key(&mut app, ch('C'));
        handle_key(&mut app, ch('n'));
        assert_eq!(texts(&app), vec!["a"]);
        assert_eq!(app.confirm, None);
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn quit_yes_saves_and_exits() {
        let (tmp, mut app) = app_with_tasks(&[("keep me", TaskStatus::Todo)]);
        handle_key(&mut app, ch('q'));
        assert!(!app.should_quit);
        handle_key(&mut app, ch('y'));

        assert!(app.should_quit);
        let saved = std::fs::read_to_string(tmp.path().join("memo_data.json")).unwrap();
        assert!(saved.contains("keep me"));
    }

    #[test]
    fn quit_esc_resumes() {
        let (_tmp, mut app) = app_with_tasks(&[]);
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Confirm);
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(!app.should_quit);
    }

    #[test]
    fn other_keys_wait() {
        let (_tmp, mut app) = app_with_tasks(&[("a", TaskStatus::Todo)]);
        handle_key(&mut app, ch('C'));
        handle_key(&mut app, ch('d'));
        assert_eq!(app.mode, Mode::Confirm);
        assert_eq!(app.session.counts().complete, 0);
    }
}
