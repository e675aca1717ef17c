//! Task data model and line codec

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors from decoding a single pending-file line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("priority '{0}' is not a non-negative integer")]
    InvalidPriority(String),

    #[error("missing task text after the priority")]
    MissingText,
}

/// A pending task: a priority and one line of free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// Sort key; lower values list first
    pub priority: u64,

    /// Free text, non-empty, single line
    pub text: String,
}

impl Task {
    /// Decode a pending-file line of the form `<priority> <text>`.
    ///
    /// Splits at the first whitespace character after the leading token and
    /// keeps everything past it verbatim, so a line with doubled spaces
    /// round-trips unchanged.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let (token, text) = line
            .split_once(|c: char| c.is_whitespace())
            .ok_or(ParseError::MissingText)?;

        if text.is_empty() {
            return Err(ParseError::MissingText);
        }

        let priority = token
            .parse::<u64>()
            .map_err(|_| ParseError::InvalidPriority(token.to_string()))?;

        Ok(Self {
            priority,
            text: text.to_string(),
        })
    }

    /// Encode as a pending-file line.
    pub fn to_line(&self) -> String {
        format!("{} {}", self.priority, self.text)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.priority, self.text)
    }
}

/// Sort ascending by priority. The sort is stable, so tasks with equal
/// priorities keep their current relative order.
pub fn sort_by_priority(tasks: &mut [Task]) {
    tasks.sort_by_key(|t| t.priority);
}
