//! 4x5 color matrices and their composition.
//!
//! A [`ColorMatrix`] maps an `(R, G, B, A)` color to a new color through a
//! linear combination of the input channels plus a constant bias. All
//! channel values are normalized to `0.0..=1.0`.
//!
//! # Example
//!
//! ```
//! use filter_matrix::{compose, ColorMatrix};
//!
//! let brighter = ColorMatrix::from_bias([0.1, 0.1, 0.1, 0.0]);
//! let darker = ColorMatrix::from_bias([-0.1, -0.1, -0.1, 0.0]);
//!
//! assert_eq!(compose([brighter, darker]), ColorMatrix::IDENTITY);
//! ```

mod color_matrix;
mod compose;
mod error;

pub use color_matrix::ColorMatrix;
pub use compose::compose;
pub use error::MatrixError;
