//! `mark del` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::store::TaskStore;

#[derive(Args)]
pub struct DelArgs {
    /// 1-based index as shown by `mark ls`
    index: usize,
}

pub fn run(dir: &Path, args: DelArgs) -> Result<()> {
    let store = TaskStore::open(dir)?;
    let removed = store.remove(args.index)?;

    println!("Deleted task #{}: \"{}\"", args.index, removed.text);
    Ok(())
}
