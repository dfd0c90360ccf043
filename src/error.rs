//! Error types
//!
//! Problems a user can fix by typing something else (bad format, out of
//! range, disallowed character) are reported on the output stream and
//! retried, so they never show up here. These enums only carry conditions
//! the caller has to deal with.

use thiserror::Error;

/// Failure of a bounded input read
#[derive(Error, Debug)]
pub enum InputError {
    /// The input stream closed before a valid value was supplied
    #[error("input stream closed before a valid value was read")]
    EndOfInput,

    /// The lower bound is above the upper bound
    #[error("no value can be both at least {min} and at most {max}")]
    EmptyRange { min: String, max: String },

    /// A bound that can't be compared against, such as NaN
    #[error("invalid bound {0}")]
    InvalidBound(String),

    /// A character read restricted to an empty set of characters
    #[error("the set of allowed characters is empty")]
    EmptyAllowedSet,

    /// Reading the input or writing the prompt failed
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Menu construction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// No entries and no exit entry, so no input could ever be accepted
    #[error("menu '{0}' has no entries and no exit entry")]
    NoSelectableEntries(String),
}

/// Table mutation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("row has {found} cells but the table has {expected} headers")]
    RowLength { expected: usize, found: usize },

    #[error("cannot replace {expected} headers with {found} while rows are present")]
    HeaderCount { expected: usize, found: usize },

    #[error("unknown alignment value {0}, expected -1, 0 or 1")]
    UnknownAlignment(i64),

    #[error("unknown alignment '{0}', expected left, center or right")]
    UnknownAlignmentName(String),
}
