//! What the renderer receives after every stack change.

use crate::matrix::ColorMatrix;

/// The composed color transform plus blur radius for one frame.
///
/// The renderer applies `matrix` per pixel and then blurs by
/// `blur_radius` (`0.0` means no blur).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    /// Composed color matrix, normalized channel units
    pub matrix: ColorMatrix,
    /// Blur radius, never negative
    pub blur_radius: f32,
}

impl RenderParams {
    /// Whether rendering with these parameters leaves the image unchanged.
    pub fn is_noop(&self) -> bool {
        self.matrix.is_identity() && self.blur_radius == 0.0
    }

    /// Whether a blur pass is needed.
    pub fn has_blur(&self) -> bool {
        self.blur_radius > 0.0
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            matrix: ColorMatrix::IDENTITY,
            blur_radius: 0.0,
        }
    }
}
