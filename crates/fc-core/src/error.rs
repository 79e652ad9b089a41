use thiserror::Error;

/// Errors raised by [`crate::HistoryStore`] operations.
///
/// Both variants leave the store untouched; callers are expected to report
/// them rather than crash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("index {index} is out of range for a history of {len} entries")]
    OutOfRange { index: usize, len: usize },

    #[error("capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),
}
