use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::model::{Config, Task, TaskId, UiConfig};
use crate::ops::session::Session;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving over the task rows
    Navigate,
    /// Typing into the new-memo line
    Insert,
    /// Waiting for y/n on `confirm`
    Confirm,
}

/// Actions that need a y/n before they run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    ClearAll,
    Quit,
}

/// Main application state
pub struct App {
    pub session: Session,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Ask before quitting
    pub confirm_exit: bool,
    /// Task list and input line folded away, title bar only
    pub collapsed: bool,
    /// Row index of the selection in display order
    pub cursor: usize,
    /// First visible row of the task list
    pub scroll_offset: usize,
    /// New-memo line being typed
    pub input: String,
    /// Byte offset into `input`, always on a grapheme boundary
    pub input_cursor: usize,
    pub confirm: Option<ConfirmAction>,
    /// One-shot message shown in the status row
    pub status_message: Option<String>,
}

impl App {
    pub fn new(session: Session, ui: &UiConfig) -> Self {
        App {
            session,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(ui),
            confirm_exit: ui.confirm_exit,
            collapsed: ui.start_collapsed,
            cursor: 0,
            scroll_offset: 0,
            input: String::new(),
            input_cursor: 0,
            confirm: None,
            status_message: None,
        }
    }

    pub fn task_count(&self) -> usize {
        self.session.tasks().len()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.session.tasks().get(self.cursor)
    }

    pub fn selected_id(&self) -> Option<TaskId> {
        self.selected_task().map(|t| t.id)
    }

    /// Put the cursor on `id` wherever the last resort moved it
    pub fn follow(&mut self, id: TaskId) {
        if let Some(pos) = self.session.list().position_of(id) {
            self.cursor = pos;
        } else {
            self.clamp_cursor();
        }
    }

    pub fn clamp_cursor(&mut self) {
        let count = self.task_count();
        self.cursor = if count == 0 { 0 } else { self.cursor.min(count - 1) };
    }

    /// Surface a failed save from the last mutation
    pub fn report_save(&mut self) {
        if let Some(err) = self.session.last_save_error() {
            self.status_message = Some(format!("save failed: {}", err));
        }
    }

    pub fn ask(&mut self, action: ConfirmAction) {
        self.confirm = Some(action);
        self.mode = Mode::Confirm;
    }

    /// Quit, asking first when configured to
    pub fn request_quit(&mut self) {
        if self.confirm_exit {
            self.ask(ConfirmAction::Quit);
        } else {
            self.finish();
        }
    }

    /// Final save, then leave the event loop. A failed save still quits.
    pub fn finish(&mut self) {
        let _ = self.session.close();
        self.should_quit = true;
    }
}

/// Run the TUI application
pub fn run(config: &Config, data_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::open(data_file);
    let mut app = App::new(session, &config.ui);
    info!(data_file = %data_file.display(), "starting tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
