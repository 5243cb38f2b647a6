//! Error types for the list pager.

use thiserror::Error;

/// Errors returned by pager operations.
#[derive(Debug, Error)]
pub enum PagerError {
    /// Writing to the render surface or reading the input source failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The id passed to `update` or `remove` does not match any item.
    #[error("no item with the given id")]
    NotFound,

    /// `select` was called with an id that does not match any item.
    #[error("cannot select an id that is not in the list")]
    InvalidSelection,

    /// `add` was called with an id that is already present.
    #[error("an item with this id already exists")]
    DuplicateId,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PagerError>;
