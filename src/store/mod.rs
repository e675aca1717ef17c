//! Flat-file task storage

pub mod error;
pub mod lines;
pub mod task_store;

pub use error::StoreError;
pub use task_store::{Report, TaskStore, COMPLETED_FILE, PENDING_FILE};

use std::path::PathBuf;

/// Default store directory: the directory containing the executable, so the
/// store files travel with the binary. Falls back to the current directory
/// when the executable path cannot be resolved.
pub fn default_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}
