//! Errors for misusing a [`Cursor`][crate::Cursor].
//!
//! Looking up or removing a key that isn't in the tree is not an error, those operations return
//! `None`.

/// Returned when a [`Cursor`][crate::Cursor] is driven out of protocol.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// `advance` was called after the last key was yielded.
    #[error("no more elements")]
    NoMoreElements,
    /// `remove_current` was called before the first `advance`, or twice for the same `advance`.
    #[error("nothing to remove")]
    NothingToRemove,
}
