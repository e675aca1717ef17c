//! `mark report` command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::Path;

use super::ls::{json_rows, TaskJson};
use crate::store::TaskStore;

#[derive(Args)]
pub struct ReportArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ReportJson<'a> {
    pending: Vec<TaskJson>,
    completed: &'a [String],
}

pub fn run(dir: &Path, args: ReportArgs) -> Result<()> {
    let store = TaskStore::open(dir)?;
    let report = store.report()?;

    if args.json {
        let payload = ReportJson {
            pending: json_rows(&report.pending),
            completed: &report.completed,
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("Pending : {}", report.pending.len());
    if report.pending.is_empty() {
        println!("{}", super::NO_PENDING_TASKS);
    } else {
        for (i, task) in report.pending.iter().enumerate() {
            println!("{}", super::format_entry(i, task));
        }
    }

    println!();
    println!("Completed : {}", report.completed.len());
    for (i, text) in report.completed.iter().enumerate() {
        println!("{}. {}", i + 1, text);
    }

    Ok(())
}
