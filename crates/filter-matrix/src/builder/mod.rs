//! Per-filter color matrix construction.
//!
//! Every filter id the engine understands maps to a [`FilterKind`], and each
//! kind maps a scalar value to a [`ColorMatrix`](crate::ColorMatrix). The set
//! of kinds is closed: adding a filter means adding a variant here.
//!
//! Kinds that are not color transforms (`blur`) or that have no matrix yet
//! (`sharpen`, `vintage`) produce the identity, as does any id the builder
//! does not recognize.
//!
//! # Example
//!
//! ```
//! use filter_matrix::build_matrix;
//!
//! let m = build_matrix("saturation", 0.0);
//! let gray = m.apply([1.0, 0.0, 0.0, 1.0]);
//! assert!((gray[0] - 0.2126).abs() < 1e-6);
//! assert!((gray[1] - 0.2126).abs() < 1e-6);
//!
//! assert!(build_matrix("blur", 4.0).is_identity());
//! assert!(build_matrix("no-such-filter", 1.0).is_identity());
//! ```

mod formulas;
mod kind;

pub use formulas::{LUMA_BT709, LUMA_HUE};
pub use kind::FilterKind;

use crate::matrix::ColorMatrix;

/// Build the color matrix for filter `id` at `value`.
///
/// Unrecognized ids yield [`ColorMatrix::IDENTITY`].
pub fn build_matrix(id: &str, value: f32) -> ColorMatrix {
    FilterKind::from_id(id).map_or(ColorMatrix::IDENTITY, |kind| kind.matrix(value))
}
