use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, ConfirmAction, Mode};
use crate::util::count_noun;

const NAVIGATE_HINT: &str = "a add  t todo  d done  x cancel  D delete  C clear  z fold  q quit";
const COLLAPSED_HINT: &str = "z unfold  q quit";
const INSERT_HINT: &str = "Enter add  Esc done";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let hint_style = Style::default().fg(app.theme.dim).bg(bg);

    let line = match app.mode {
        Mode::Confirm => {
            let question = match app.confirm {
                Some(ConfirmAction::ClearAll) => {
                    format!("clear all {}?", count_noun(app.task_count(), "task"))
                }
                Some(ConfirmAction::Quit) => "quit memo? your tasks will be saved.".to_string(),
                None => String::new(),
            };
            Line::from(vec![
                Span::styled(
                    format!(" {} ", question),
                    Style::default()
                        .fg(app.theme.text_bright)
                        .bg(bg)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("y/n", Style::default().fg(app.theme.highlight).bg(bg)),
            ])
        }
        _ => match &app.status_message {
            Some(msg) => Line::from(Span::styled(
                format!(" {}", msg),
                Style::default().fg(app.theme.text).bg(bg),
            )),
            None if app.mode == Mode::Insert => {
                Line::from(Span::styled(format!(" {}", INSERT_HINT), hint_style))
            }
            None if app.collapsed => {
                Line::from(Span::styled(format!(" {}", COLLAPSED_HINT), hint_style))
            }
            None => Line::from(Span::styled(format!(" {}", NAVIGATE_HINT), hint_style)),
        },
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
