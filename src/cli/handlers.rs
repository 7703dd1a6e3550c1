use std::error::Error;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::{config_io, log};
use crate::model::config::Config;
use crate::model::task::TaskStatus;
use crate::ops::session::Session;
use crate::ops::task_ops::TaskError;
use crate::util::count_noun;

// ---------------------------------------------------------------------------
// Setup
// ---------------------------------------------------------------------------

/// Load config, pick the data file, start logging. Shared by TUI and CLI.
pub fn prepare(cli: &Cli) -> Result<(Config, PathBuf), Box<dyn Error>> {
    let config = config_io::load_config(cli.config.as_deref())?;
    let data_file = config_io::resolve_data_file(cli.file.as_deref(), &config);
    // Logging is optional; a read-only log location must not stop the app
    if let Err(e) = log::init(&config.log, &data_file) {
        eprintln!("warning: logging disabled: {}", e);
    }
    info!(data_file = %data_file.display(), "memo starting");
    Ok((config, data_file))
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(command: Commands, data_file: &Path, json: bool) -> Result<(), Box<dyn Error>> {
    let mut session = Session::open(data_file);
    match command {
        Commands::Add(args) => cmd_add(&mut session, args),
        Commands::List(args) => cmd_list(&session, args, json),
        Commands::Done(args) => cmd_set(&mut session, args.position, TaskStatus::Complete),
        Commands::Cancel(args) => cmd_set(&mut session, args.position, TaskStatus::Cancel),
        Commands::Todo(args) => cmd_set(&mut session, args.position, TaskStatus::Todo),
        Commands::Set(args) => {
            let status = args
                .status
                .parse::<TaskStatus>()
                .map_err(TaskError::InvalidStatus)?;
            cmd_set(&mut session, args.position, status)
        }
        Commands::Rm(args) => cmd_rm(&mut session, args.position),
        Commands::Sort => cmd_sort(&mut session),
        Commands::Clear(args) => cmd_clear(&mut session, args),
        Commands::Stats => cmd_stats(&session, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Map a 1-based position from `memo list` to a list index
fn position_to_index(session: &Session, position: usize) -> Result<usize, Box<dyn Error>> {
    let len = session.tasks().len();
    if position == 0 || position > len {
        return Err(format!("no task at position {} (list has {})", position, len).into());
    }
    Ok(position - 1)
}

/// A mutating command fails if its result didn't reach the disk
fn ensure_saved(session: &Session) -> Result<(), Box<dyn Error>> {
    match session.last_save_error() {
        Some(err) => Err(err.to_string().into()),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(session: &Session, args: ListArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let filter = args
        .status
        .as_deref()
        .map(str::parse::<TaskStatus>)
        .transpose()
        .map_err(TaskError::InvalidStatus)?;

    let shown: Vec<(usize, &crate::model::Task)> = session
        .tasks()
        .iter()
        .enumerate()
        .map(|(i, t)| (i + 1, t))
        .filter(|(_, t)| filter.is_none_or(|s| t.status == s))
        .collect();

    if json {
        let tasks: Vec<TaskJson> = shown
            .iter()
            .map(|(pos, t)| task_to_json(*pos, t))
            .collect();
        println!("{}", serde_json::to_string_pretty(&tasks)?);
    } else {
        let width = session.tasks().len().to_string().len();
        for (pos, task) in &shown {
            println!("{}", format_task_line(*pos, task, width));
        }
    }
    Ok(())
}

fn cmd_stats(session: &Session, json: bool) -> Result<(), Box<dyn Error>> {
    let counts = session.counts();
    if json {
        println!("{}", serde_json::to_string_pretty(&stats_to_json(counts))?);
    } else {
        println!("{}", format_stats(counts));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(session: &mut Session, args: AddArgs) -> Result<(), Box<dyn Error>> {
    let text = args.text.join(" ");
    match session.add(&text) {
        Some(id) => {
            ensure_saved(session)?;
            let position = session.list().position_of(id).map_or(0, |i| i + 1);
            println!("added {}. {}", position, text);
        }
        None => eprintln!("nothing to add: memo text is blank"),
    }
    Ok(())
}

fn cmd_set(session: &mut Session, position: usize, status: TaskStatus) -> Result<(), Box<dyn Error>> {
    let index = position_to_index(session, position)?;
    let id = session.set_status(index, status)?;
    ensure_saved(session)?;
    if let Some(task) = session.list().find(id) {
        println!("{} {}", task.status.marker(), task.text);
    }
    Ok(())
}

fn cmd_rm(session: &mut Session, position: usize) -> Result<(), Box<dyn Error>> {
    let index = position_to_index(session, position)?;
    let task = session.remove(index)?;
    ensure_saved(session)?;
    println!("deleted {}", task.text);
    Ok(())
}

fn cmd_sort(session: &mut Session) -> Result<(), Box<dyn Error>> {
    session.sort();
    ensure_saved(session)?;
    Ok(())
}

fn cmd_clear(session: &mut Session, args: ClearArgs) -> Result<(), Box<dyn Error>> {
    let count = session.tasks().len();
    if count == 0 {
        println!("nothing to clear");
        return Ok(());
    }
    if !args.yes {
        warn!(count, "clear refused without --yes");
        return Err(format!("refusing to delete {} without --yes", count_noun(count, "task")).into());
    }
    let removed = session.clear();
    ensure_saved(session)?;
    println!("cleared {}", count_noun(removed, "task"));
    Ok(())
}
