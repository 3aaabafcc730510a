use thiserror::Error;

/// A violated precondition on a [`Dictionary`](crate::Dictionary) operation.
///
/// Each variant records the name of the method that was called, so the rendered
/// message reads like `Dictionary: remove(): does not contain key`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum DictionaryError {
    /// A key lookup or removal named a key that is not present.
    #[error("Dictionary: {0}(): does not contain key")]
    NotFound(&'static str),
    /// The cursor was positioned on a dictionary with no pairs.
    #[error("Dictionary: {0}(): empty dictionary")]
    Empty(&'static str),
    /// A cursor operation was called while the cursor is undefined.
    #[error("Dictionary: {0}(): current not set")]
    NoCurrent(&'static str),
}

/// Result alias used by every fallible [`Dictionary`](crate::Dictionary) operation.
pub type Result<T> = core::result::Result<T, DictionaryError>;
