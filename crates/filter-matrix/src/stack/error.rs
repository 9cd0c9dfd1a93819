//! Error type for filter stack operations

use std::fmt;

/// Error type for stack mutations that reference a filter id.
///
/// These are input problems (stale UI state, typos in a preset), never
/// engine faults: the stack is left untouched and the caller decides
/// whether to report them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    /// The id is not in the catalog
    UnknownFilter(String),
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackError::UnknownFilter(id) => write!(f, "unknown filter '{}'", id),
        }
    }
}

impl std::error::Error for StackError {}
