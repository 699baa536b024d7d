//! Error types

use thiserror::Error;

/// Errors returned by list adapter lookups and mutations.
///
/// A failed call leaves the list untouched and produces no [`Change`](crate::Change).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// A position argument was not a valid index into the list.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
