//! CLI command implementations

pub mod add;
pub mod definition;
pub mod del;
pub mod done;
pub mod ls;
pub mod report;
pub mod update;

pub use definition::{Cli, Commands};

use crate::task::Task;

/// Fixed message for an empty pending listing.
pub const NO_PENDING_TASKS: &str = "There are no pending tasks!";

/// One row of the pending listing, from a 0-based position in the sorted
/// order: `3. water the plants [2]`.
pub fn format_entry(position: usize, task: &Task) -> String {
    format!("{}. {} [{}]", position + 1, task.text, task.priority)
}
