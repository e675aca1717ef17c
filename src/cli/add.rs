//! `mark add` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::store::TaskStore;

#[derive(Args)]
pub struct AddArgs {
    /// Task priority; lower values list first
    #[arg(allow_negative_numbers = true)]
    priority: i64,

    /// Task text; multiple words are joined with single spaces
    #[arg(required = true, num_args = 1..)]
    text: Vec<String>,
}

pub fn run(dir: &Path, args: AddArgs) -> Result<()> {
    let store = TaskStore::open(dir)?;
    let task = store.add(args.priority, &args.text.join(" "))?;

    println!(
        "Added task: \"{}\" with priority {}.",
        task.text, task.priority
    );
    Ok(())
}
