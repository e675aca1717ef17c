use thiserror::Error;

use crate::task::ParseError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("priority cannot be negative (got {0})")]
    NegativePriority(i64),

    #[error("no pending task with index #{0} exists")]
    IndexOutOfRange(usize),

    #[error("task text cannot be empty")]
    EmptyText,

    #[error("task text cannot contain newlines")]
    TextHasNewline,

    #[error("malformed entry on line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Validation failures abort a single operation with no mutation;
    /// anything else is fatal for the whole invocation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StoreError::NegativePriority(_)
                | StoreError::IndexOutOfRange(_)
                | StoreError::EmptyText
                | StoreError::TextHasNewline
        )
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
