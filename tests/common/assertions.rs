//! Assertion helpers for tests.

use filter_matrix::ColorMatrix;

pub const EPSILON: f32 = 1e-5;

/// Assert two pixels match channel by channel within `EPSILON`
pub fn assert_pixel_approx(actual: [f32; 4], expected: [f32; 4]) {
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            (a - e).abs() <= EPSILON,
            "Channel {i} differs: expected {expected:?}, got {actual:?}"
        );
    }
}

/// Assert two matrices match within `EPSILON`
pub fn assert_matrix_approx(actual: &ColorMatrix, expected: &ColorMatrix) {
    assert!(
        actual.approx_eq(expected, EPSILON),
        "Matrices differ:\n expected {:?}\n got      {:?}",
        expected.as_array(),
        actual.as_array()
    );
}
