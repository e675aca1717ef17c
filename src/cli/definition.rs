//! Top-level CLI definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::add::AddArgs;
use super::del::DelArgs;
use super::done::DoneArgs;
use super::ls::LsArgs;
use super::report::ReportArgs;
use super::update::UpdateArgs;

#[derive(Parser)]
#[command(
    name = "mark",
    version,
    about = "Priority-ordered todo list kept in flat text files"
)]
pub struct Cli {
    /// Directory holding task.txt and completed.txt (defaults to the
    /// executable's directory)
    #[arg(short = 'C', long = "dir", global = true, env = "MARK_DIR")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List pending tasks sorted by priority
    Ls(LsArgs),

    /// Show pending and completed tasks with counts
    Report(ReportArgs),

    /// Add a new pending task
    Add(AddArgs),

    /// Delete the pending task at the given index
    Del(DelArgs),

    /// Mark the pending task at the given index as done
    Done(DoneArgs),

    /// Replace a task's priority and, optionally, its text
    Update(UpdateArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
