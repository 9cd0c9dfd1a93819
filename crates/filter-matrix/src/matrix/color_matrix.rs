//! The 4x5 color matrix type.

use super::error::MatrixError;

/// A 4x5 affine color transform over normalized `(R, G, B, A)`.
///
/// Stored row-major as 20 values: entry `row * 5 + col`, where rows are the
/// output channels R, G, B, A and columns 0..4 weight the input channels.
/// Column 4 is the constant bias added to each output channel.
///
/// Bias values are expressed in the same normalized `0.0..=1.0` units as
/// the channels (an invert bias is `1.0`, not `255`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix([f32; 20]);

impl ColorMatrix {
    /// The no-op transform.
    #[rustfmt::skip]
    pub const IDENTITY: ColorMatrix = ColorMatrix([
        1.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 1.0, 0.0,
    ]);

    /// Number of entries in a matrix.
    pub const LEN: usize = 20;

    /// Create a matrix from 20 row-major values.
    #[inline]
    pub const fn new(values: [f32; 20]) -> Self {
        Self(values)
    }

    /// Create a matrix that only adds a constant to each channel.
    ///
    /// # Example
    /// ```
    /// use filter_matrix::ColorMatrix;
    /// let m = ColorMatrix::from_bias([0.25, 0.0, 0.0, 0.0]);
    /// assert_eq!(m.apply([0.5, 0.5, 0.5, 1.0]), [0.75, 0.5, 0.5, 1.0]);
    /// ```
    pub fn from_bias(bias: [f32; 4]) -> Self {
        let mut m = Self::IDENTITY;
        for (row, b) in bias.into_iter().enumerate() {
            m.0[row * 5 + 4] = b;
        }
        m
    }

    /// Create a matrix from a 3x3 RGB transform and an RGB bias.
    ///
    /// The alpha row is left as identity, which is what every color filter
    /// in this crate wants.
    pub fn from_rgb(linear: [[f32; 3]; 3], bias: [f32; 3]) -> Self {
        let mut m = Self::IDENTITY;
        for row in 0..3 {
            for col in 0..3 {
                m.0[row * 5 + col] = linear[row][col];
            }
            m.0[row * 5 + 4] = bias[row];
        }
        m
    }

    /// Entry at `row` (0..4) and `col` (0..5).
    ///
    /// # Panics
    /// Panics if `row >= 4` or `col >= 5`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        assert!(row < 4 && col < 5, "color matrix index out of range");
        self.0[row * 5 + col]
    }

    /// Borrow the raw row-major values.
    #[inline]
    pub fn as_array(&self) -> &[f32; 20] {
        &self.0
    }

    /// Consume into the raw row-major values, e.g. for a GPU uniform.
    #[inline]
    pub fn into_array(self) -> [f32; 20] {
        self.0
    }

    /// Bit-exact comparison with [`ColorMatrix::IDENTITY`].
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Whether every entry is within `epsilon` of the matching entry in `other`.
    pub fn approx_eq(&self, other: &ColorMatrix, epsilon: f32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Compose two transforms: apply `self` first, then `next`.
    ///
    /// The result's linear part is `next_linear * self_linear` and its bias
    /// is `next_linear * self_bias + next_bias`, so
    /// `a.then(&b).apply(c) == b.apply(a.apply(c))` up to rounding.
    ///
    /// # Example
    /// ```
    /// use filter_matrix::ColorMatrix;
    ///
    /// #[rustfmt::skip]
    /// let invert = ColorMatrix::new([
    ///     -1.0, 0.0, 0.0, 0.0, 1.0,
    ///     0.0, -1.0, 0.0, 0.0, 1.0,
    ///     0.0, 0.0, -1.0, 0.0, 1.0,
    ///     0.0, 0.0, 0.0, 1.0, 0.0,
    /// ]);
    /// let lift = ColorMatrix::from_bias([0.5, 0.5, 0.5, 0.0]);
    ///
    /// // Invert-then-lift differs from lift-then-invert.
    /// assert_eq!(invert.then(&lift).apply([1.0, 0.0, 0.0, 1.0]), [0.5, 1.5, 1.5, 1.0]);
    /// assert_eq!(lift.then(&invert).apply([1.0, 0.0, 0.0, 1.0]), [-0.5, 0.5, 0.5, 1.0]);
    /// ```
    pub fn then(&self, next: &ColorMatrix) -> ColorMatrix {
        let a = &self.0;
        let b = &next.0;
        let mut out = [0.0f32; 20];

        for row in 0..4 {
            for col in 0..5 {
                let mut acc = b[row * 5] * a[col]
                    + b[row * 5 + 1] * a[5 + col]
                    + b[row * 5 + 2] * a[10 + col]
                    + b[row * 5 + 3] * a[15 + col];
                if col == 4 {
                    acc += b[row * 5 + 4];
                }
                out[row * 5 + col] = acc;
            }
        }

        ColorMatrix(out)
    }

    /// Apply the transform to one normalized `[r, g, b, a]` pixel.
    ///
    /// Results are not clamped; fitting them into the display range is the
    /// renderer's job.
    pub fn apply(&self, color: [f32; 4]) -> [f32; 4] {
        let m = &self.0;
        let mut out = [0.0f32; 4];
        for (row, channel) in out.iter_mut().enumerate() {
            let r = &m[row * 5..row * 5 + 5];
            *channel =
                r[0] * color[0] + r[1] * color[1] + r[2] * color[2] + r[3] * color[3] + r[4];
        }
        out
    }
}

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 20]> for ColorMatrix {
    fn from(values: [f32; 20]) -> Self {
        Self(values)
    }
}

impl From<ColorMatrix> for [f32; 20] {
    fn from(m: ColorMatrix) -> Self {
        m.0
    }
}

impl TryFrom<&[f32]> for ColorMatrix {
    type Error = MatrixError;

    /// Build a matrix from untyped data, checking its shape.
    ///
    /// # Example
    /// ```
    /// use filter_matrix::{ColorMatrix, MatrixError};
    ///
    /// let short = [1.0f32; 16];
    /// assert_eq!(
    ///     ColorMatrix::try_from(&short[..]),
    ///     Err(MatrixError::Malformed { len: 16 })
    /// );
    /// ```
    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        let array: [f32; Self::LEN] = values
            .try_into()
            .map_err(|_| MatrixError::Malformed { len: values.len() })?;
        if let Some(index) = array.iter().position(|v| !v.is_finite()) {
            return Err(MatrixError::NonFinite { index });
        }
        Ok(Self(array))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    const INVERT: ColorMatrix = ColorMatrix([
        -1.0, 0.0, 0.0, 0.0, 1.0,
        0.0, -1.0, 0.0, 0.0, 1.0,
        0.0, 0.0, -1.0, 0.0, 1.0,
        0.0, 0.0, 0.0, 1.0, 0.0,
    ]);

    #[test]
    fn test_identity_apply_is_noop() {
        let color = [0.1, 0.4, 0.9, 0.5];
        assert_eq!(ColorMatrix::IDENTITY.apply(color), color);
    }

    #[test]
    fn test_default_is_identity() {
        assert!(ColorMatrix::default().is_identity());
    }

    #[test]
    fn test_from_bias_sets_column_four() {
        let m = ColorMatrix::from_bias([0.1, 0.2, 0.3, 0.4]);
        assert_eq!(m.get(0, 4), 0.1);
        assert_eq!(m.get(1, 4), 0.2);
        assert_eq!(m.get(2, 4), 0.3);
        assert_eq!(m.get(3, 4), 0.4);
        assert_eq!(m.get(0, 0), 1.0);
    }

    #[test]
    fn test_from_rgb_keeps_alpha_row() {
        let m = ColorMatrix::from_rgb(
            [[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]],
            [0.0; 3],
        );
        assert_eq!(&m.as_array()[15..ColorMatrix::LEN], &[0.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range_panics() {
        ColorMatrix::IDENTITY.get(4, 0);
    }

    #[test]
    fn test_then_with_identity_is_unchanged() {
        assert_eq!(ColorMatrix::IDENTITY.then(&INVERT), INVERT);
        assert_eq!(INVERT.then(&ColorMatrix::IDENTITY), INVERT);
    }

    #[test]
    fn test_then_applies_self_first() {
        let lift = ColorMatrix::from_bias([0.2, 0.2, 0.2, 0.0]);
        let color = [1.0, 0.0, 0.0, 1.0];

        let composed = INVERT.then(&lift).apply(color);
        let sequential = lift.apply(INVERT.apply(color));
        for (a, b) in composed.iter().zip(sequential.iter()) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_invert_twice_is_identity() {
        assert_eq!(INVERT.then(&INVERT), ColorMatrix::IDENTITY);
    }

    #[test]
    fn test_then_bias_uses_next_linear_part() {
        // scale 2x, then lift: bias stays 0.1 because lift's linear part is identity
        let scale = ColorMatrix::from_rgb(
            [[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]],
            [0.0; 3],
        );
        let lift = ColorMatrix::from_bias([0.1, 0.1, 0.1, 0.0]);
        assert_eq!(scale.then(&lift).get(0, 4), 0.1);
        // lift, then scale: the lift gets scaled too
        assert_eq!(lift.then(&scale).get(0, 4), 0.2);
    }

    #[test]
    fn test_approx_eq() {
        let a = ColorMatrix::from_bias([0.1, 0.0, 0.0, 0.0]);
        let b = ColorMatrix::from_bias([0.1000001, 0.0, 0.0, 0.0]);
        assert!(a.approx_eq(&b, 1e-5));
        assert!(!a.approx_eq(&ColorMatrix::IDENTITY, 1e-5));
    }

    #[test]
    fn test_try_from_slice() {
        let values = *ColorMatrix::IDENTITY.as_array();
        assert_eq!(ColorMatrix::try_from(&values[..]), Ok(ColorMatrix::IDENTITY));
    }

    #[test]
    fn test_try_from_rejects_wrong_length() {
        let values = vec![0.0f32; 21];
        assert_eq!(
            ColorMatrix::try_from(values.as_slice()),
            Err(MatrixError::Malformed { len: 21 })
        );
        assert_eq!(
            ColorMatrix::try_from(&[][..]),
            Err(MatrixError::Malformed { len: 0 })
        );
    }

    #[test]
    fn test_try_from_rejects_nan() {
        let mut values = *ColorMatrix::IDENTITY.as_array();
        values[7] = f32::NAN;
        assert_eq!(
            ColorMatrix::try_from(&values[..]),
            Err(MatrixError::NonFinite { index: 7 })
        );
    }

    #[test]
    fn test_matrix_error_display() {
        assert_eq!(
            MatrixError::Malformed { len: 16 }.to_string(),
            "malformed color matrix: expected 20 entries, got 16"
        );
        let exact = [0.0f32; ColorMatrix::LEN];
        assert!(ColorMatrix::try_from(&exact[..]).is_ok());
    }
}
