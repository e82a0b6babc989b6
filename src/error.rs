//! Error types for list operations.
//!
//! Exactly three failure kinds exist; everything else either cannot fail or
//! reports absence through `Option` (`find` returning `None` is not an
//! error). Failed operations leave the list untouched.

use core::fmt;

/// Error returned by fallible list operations.
///
/// Positions are `usize`, so the negative-index failure mode of index
/// arithmetic in other languages is unrepresentable here; only the upper
/// bound can be violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The list has no elements to remove.
    ///
    /// Returned by `remove_from_head` and `remove_from_tail`.
    Empty,

    /// The position does not name an existing element.
    ///
    /// Returned by `remove_at` and `get_at` when `index >= len`.
    InvalidIndex {
        /// The rejected position.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },

    /// The position is not a valid insertion point.
    ///
    /// Returned by `insert_at` when `index > len` (`index == len` is a
    /// valid append).
    OutOfBounds {
        /// The rejected position.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "list is empty"),
            Self::InvalidIndex { index, len } => {
                write!(f, "invalid index {index} for list of length {len}")
            }
            Self::OutOfBounds { index, len } => {
                write!(
                    f,
                    "insertion index {index} out of bounds for list of length {len}"
                )
            }
        }
    }
}

impl std::error::Error for ListError {}
