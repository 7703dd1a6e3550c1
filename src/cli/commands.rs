use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "memo", about = concat!("memo v", env!("CARGO_PKG_VERSION"), " - a small list of things to do"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data file to use instead of the configured one
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<PathBuf>,

    /// Config file (default: <config dir>/memo/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a todo
    Add(AddArgs),
    /// List tasks in display order
    List(ListArgs),
    /// Mark a task complete
    Done(PositionArg),
    /// Mark a task cancelled
    Cancel(PositionArg),
    /// Put a task back to todo
    Todo(PositionArg),
    /// Set a task's status
    Set(SetArgs),
    /// Delete a task
    Rm(PositionArg),
    /// Re-sort the list (todo first) and save
    Sort,
    /// Delete every task
    Clear(ClearArgs),
    /// Show how many tasks are in each status
    Stats,
}

#[derive(Args)]
pub struct AddArgs {
    /// Memo text (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only show tasks with this status (todo, complete, cancel)
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args)]
pub struct PositionArg {
    /// Task position as shown by `memo list` (1-based)
    pub position: usize,
}

#[derive(Args)]
pub struct SetArgs {
    /// Task position as shown by `memo list` (1-based)
    pub position: usize,
    /// New status: todo, complete (done) or cancel
    pub status: String,
}

#[derive(Args)]
pub struct ClearArgs {
    /// Confirm deleting every task
    #[arg(long)]
    pub yes: bool,
}
