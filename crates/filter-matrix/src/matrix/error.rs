//! Error type for untyped matrix input.

use super::ColorMatrix;
use std::fmt;

/// Error returned when raw data cannot form a [`ColorMatrix`](super::ColorMatrix).
///
/// Inside the crate every matrix is a fixed `[f32; 20]`, so this can only
/// come from data handed in from outside (a renderer bridge, a config file).
/// A malformed matrix is a programming error and callers should refuse to
/// render with it rather than substitute a fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Input did not have exactly 20 entries
    Malformed {
        /// Number of entries actually supplied
        len: usize,
    },
    /// Input contained NaN or an infinity at the given index
    NonFinite {
        /// Row-major index of the offending entry
        index: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::Malformed { len } => {
                write!(
                    f,
                    "malformed color matrix: expected {} entries, got {}",
                    ColorMatrix::LEN,
                    len
                )
            }
            MatrixError::NonFinite { index } => {
                write!(f, "color matrix entry {} is not finite", index)
            }
        }
    }
}

impl std::error::Error for MatrixError {}
