//! `mark update` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::store::TaskStore;

#[derive(Args)]
pub struct UpdateArgs {
    /// 1-based index as shown by `mark ls`
    index: usize,

    /// New priority; always replaces the old one
    #[arg(allow_negative_numbers = true)]
    priority: i64,

    /// New text; omitted or empty keeps the current text
    #[arg(num_args = 0..)]
    text: Vec<String>,
}

pub fn run(dir: &Path, args: UpdateArgs) -> Result<()> {
    let store = TaskStore::open(dir)?;

    let text = args.text.join(" ");
    let text = if text.is_empty() {
        None
    } else {
        Some(text.as_str())
    };

    let task = store.update(args.index, args.priority, text)?;

    println!("Updated task #{}: \"{}\" [{}]", args.index, task.text, task.priority);
    Ok(())
}
