//! Line-file primitives: whole-file reads, full rewrites, appends

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Read all non-empty lines, in file order. A missing file reads as empty.
pub fn read_lines(path: &Path) -> std::io::Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let lines: Vec<String> = content
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    debug!(path = %path.display(), count = lines.len(), "read store file");
    Ok(lines)
}

/// Overwrite the file with the lines joined by newline. Full-file
/// replacement; no trailing newline beyond the join.
pub fn write_all(path: &Path, lines: &[String]) -> std::io::Result<()> {
    debug!(path = %path.display(), count = lines.len(), "rewriting store file");
    fs::write(path, lines.join("\n"))
}

/// Append one line plus a trailing newline without reading existing content.
pub fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)
}

/// Create an empty file when absent; leaves existing content alone.
pub fn ensure_exists(path: &Path) -> std::io::Result<()> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(|_| ())
}
