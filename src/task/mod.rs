//! Task model and line codec

pub mod model;

pub use model::{sort_by_priority, ParseError, Task};
