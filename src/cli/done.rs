//! `mark done` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::store::TaskStore;

#[derive(Args)]
pub struct DoneArgs {
    /// 1-based index as shown by `mark ls`
    index: usize,
}

pub fn run(dir: &Path, args: DoneArgs) -> Result<()> {
    let store = TaskStore::open(dir)?;
    let task = store.complete(args.index)?;

    println!("Marked \"{}\" as done.", task.text);
    Ok(())
}
