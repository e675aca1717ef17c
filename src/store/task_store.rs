//! Task store - two flat files, one mutation per invocation

use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::{Result, StoreError};
use super::lines;
use crate::task::{sort_by_priority, Task};

/// Pending-task file name inside the store directory.
pub const PENDING_FILE: &str = "task.txt";

/// Completed-task file name inside the store directory.
pub const COMPLETED_FILE: &str = "completed.txt";

/// Owns the two store file paths. Every operation is a single
/// load -> validate -> mutate -> persist pass; no state survives between
/// calls, the files are the only truth.
pub struct TaskStore {
    pending_path: PathBuf,
    completed_path: PathBuf,
}

/// Snapshot of both collections, loaded in one call for `report`.
pub struct Report {
    pub pending: Vec<Task>,
    pub completed: Vec<String>,
}

impl TaskStore {
    /// Open the store in `dir`, creating empty files as needed.
    pub fn open(dir: &Path) -> Result<Self> {
        let pending_path = dir.join(PENDING_FILE);
        let completed_path = dir.join(COMPLETED_FILE);

        lines::ensure_exists(&pending_path)?;
        lines::ensure_exists(&completed_path)?;

        Ok(Self {
            pending_path,
            completed_path,
        })
    }

    /// Pending tasks, sorted ascending by priority. A malformed line fails
    /// the whole load; a broken store file is surfaced, never reordered.
    pub fn pending(&self) -> Result<Vec<Task>> {
        let mut tasks = Vec::new();
        for (idx, line) in lines::read_lines(&self.pending_path)?.iter().enumerate() {
            let task = Task::parse(line).map_err(|source| StoreError::Malformed {
                line: idx + 1,
                source,
            })?;
            tasks.push(task);
        }

        sort_by_priority(&mut tasks);
        Ok(tasks)
    }

    /// Completed task text, in completion order.
    pub fn completed(&self) -> Result<Vec<String>> {
        Ok(lines::read_lines(&self.completed_path)?)
    }

    /// Add a pending task. Negative priorities and empty or multi-line text
    /// are rejected without touching the file.
    pub fn add(&self, priority: i64, text: &str) -> Result<Task> {
        if priority < 0 {
            return Err(StoreError::NegativePriority(priority));
        }
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }
        if text.contains('\n') {
            return Err(StoreError::TextHasNewline);
        }

        let task = Task {
            priority: priority as u64,
            text: text.to_string(),
        };

        let mut tasks = self.pending()?;
        tasks.push(task.clone());
        sort_by_priority(&mut tasks);
        self.write_pending(&tasks)?;

        debug!(priority = task.priority, "added pending task");
        Ok(task)
    }

    /// Remove the task at the 1-based index in the sorted listing and
    /// return it.
    pub fn remove(&self, index: usize) -> Result<Task> {
        let mut tasks = self.pending()?;
        check_index(index, tasks.len())?;

        let removed = tasks.remove(index - 1);
        self.write_pending(&tasks)?;

        debug!(index, "removed pending task");
        Ok(removed)
    }

    /// Move the task at the 1-based index to the completed file, dropping
    /// its priority. Two writes, completed append first; a crash between
    /// them duplicates the task rather than losing it.
    pub fn complete(&self, index: usize) -> Result<Task> {
        let mut tasks = self.pending()?;
        check_index(index, tasks.len())?;

        let task = tasks.remove(index - 1);
        lines::append_line(&self.completed_path, &task.text)?;
        self.write_pending(&tasks)?;

        debug!(index, "completed task");
        Ok(task)
    }

    /// Replace the priority (always) and text (when given and non-empty) of
    /// the task at the 1-based index, then re-sort.
    pub fn update(&self, index: usize, priority: i64, text: Option<&str>) -> Result<Task> {
        if priority < 0 {
            return Err(StoreError::NegativePriority(priority));
        }
        if let Some(text) = text {
            if text.contains('\n') {
                return Err(StoreError::TextHasNewline);
            }
        }

        let mut tasks = self.pending()?;
        check_index(index, tasks.len())?;

        let slot = &mut tasks[index - 1];
        slot.priority = priority as u64;
        if let Some(text) = text.filter(|t| !t.is_empty()) {
            slot.text = text.to_string();
        }
        let updated = slot.clone();

        sort_by_priority(&mut tasks);
        self.write_pending(&tasks)?;

        debug!(index, priority = updated.priority, "updated task");
        Ok(updated)
    }

    /// Both collections in one pass.
    pub fn report(&self) -> Result<Report> {
        Ok(Report {
            pending: self.pending()?,
            completed: self.completed()?,
        })
    }

    fn write_pending(&self, tasks: &[Task]) -> Result<()> {
        let encoded: Vec<String> = tasks.iter().map(Task::to_line).collect();
        Ok(lines::write_all(&self.pending_path, &encoded)?)
    }
}

fn check_index(index: usize, count: usize) -> Result<()> {
    if index < 1 || index > count {
        return Err(StoreError::IndexOutOfRange(index));
    }
    Ok(())
}
