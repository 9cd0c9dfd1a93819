//! Folding a sequence of color matrices into one.

use super::color_matrix::ColorMatrix;

/// Fold matrices left to right into a single equivalent transform.
///
/// The first matrix is applied to the pixel first. An empty sequence
/// yields exactly [`ColorMatrix::IDENTITY`].
///
/// Composition is associative but not commutative, so the order of the
/// input is the order in which the filters visually apply.
///
/// # Example
/// ```
/// use filter_matrix::{compose, ColorMatrix};
///
/// assert!(compose(std::iter::empty()).is_identity());
///
/// let up = ColorMatrix::from_bias([0.3, 0.3, 0.3, 0.0]);
/// let m = compose([up, up]);
/// assert_eq!(m.get(0, 4), 0.6);
/// ```
pub fn compose<I>(matrices: I) -> ColorMatrix
where
    I: IntoIterator<Item = ColorMatrix>,
{
    matrices
        .into_iter()
        .fold(ColorMatrix::IDENTITY, |acc, next| acc.then(&next))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale(k: f32) -> ColorMatrix {
        ColorMatrix::from_rgb([[k, 0.0, 0.0], [0.0, k, 0.0], [0.0, 0.0, k]], [0.0; 3])
    }

    #[test]
    fn test_compose_empty_is_exact_identity() {
        let m = compose(Vec::new());
        assert_eq!(
            m.as_array().map(f32::to_bits),
            ColorMatrix::IDENTITY.as_array().map(f32::to_bits)
        );
    }

    #[test]
    fn test_compose_single_is_unchanged() {
        let m = ColorMatrix::from_bias([0.25, -0.5, 0.125, 0.0]);
        assert_eq!(compose([m]), m);
    }

    #[test]
    fn test_compose_order_matters() {
        let lift = ColorMatrix::from_bias([0.1, 0.1, 0.1, 0.0]);
        let a = compose([lift, scale(2.0)]);
        let b = compose([scale(2.0), lift]);
        assert_ne!(a, b);
        assert_eq!(a.get(0, 4), 0.2);
        assert_eq!(b.get(0, 4), 0.1);
    }

    #[test]
    fn test_compose_is_associative() {
        let a = ColorMatrix::from_bias([0.1, 0.2, 0.3, 0.0]);
        let b = scale(0.5);
        let c = ColorMatrix::from_rgb(
            [[0.3, 0.6, 0.1], [0.2, 0.7, 0.1], [0.25, 0.5, 0.25]],
            [0.05, 0.0, -0.05],
        );

        let left = compose([compose([a, b]), c]);
        let right = compose([a, compose([b, c])]);
        assert!(left.approx_eq(&right, 1e-6));
    }

    #[test]
    fn test_compose_matches_sequential_application() {
        let chain = [
            scale(1.5),
            ColorMatrix::from_bias([-0.2, 0.0, 0.1, 0.0]),
            ColorMatrix::from_rgb([[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]], [0.0; 3]),
        ];
        let color = [0.2, 0.4, 0.6, 1.0];

        let expected = chain.iter().fold(color, |c, m| m.apply(c));
        let actual = compose(chain).apply(color);
        for (e, a) in expected.iter().zip(actual.iter()) {
            assert!((e - a).abs() < 1e-6, "expected {:?}, got {:?}", expected, actual);
        }
    }
}
