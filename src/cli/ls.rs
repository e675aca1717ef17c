//! `mark ls` command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::Path;

use crate::store::TaskStore;
use crate::task::Task;

#[derive(Args)]
pub struct LsArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
pub(super) struct TaskJson {
    index: usize,
    priority: u64,
    text: String,
}

pub(super) fn json_rows(tasks: &[Task]) -> Vec<TaskJson> {
    tasks
        .iter()
        .enumerate()
        .map(|(i, task)| TaskJson {
            index: i + 1,
            priority: task.priority,
            text: task.text.clone(),
        })
        .collect()
}

pub fn run(dir: &Path, args: LsArgs) -> Result<()> {
    let store = TaskStore::open(dir)?;
    let tasks = store.pending()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&json_rows(&tasks))?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("{}", super::NO_PENDING_TASKS);
        return Ok(());
    }

    for (i, task) in tasks.iter().enumerate() {
        println!("{}", super::format_entry(i, task));
    }

    Ok(())
}
