//! Color matrix formulas, all in normalized `0.0..=1.0` channel units.

use crate::matrix::ColorMatrix;

/// ITU-R BT.709 luminance weights (R, G, B).
pub const LUMA_BT709: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// Luminance weights used by the hue rotation (R, G, B).
///
/// These are the rounded weights from the SVG `hueRotate` derivation; the
/// rotation coefficients below are only consistent with these values.
pub const LUMA_HUE: [f32; 3] = [0.213, 0.715, 0.072];

/// Mid-grey pivot for contrast.
const MIDPOINT: f32 = 0.5;

/// Full-scale channel value.
const CHANNEL_MAX: f32 = 1.0;

#[rustfmt::skip]
const SEPIA: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

pub(crate) fn brightness(v: f32) -> ColorMatrix {
    ColorMatrix::from_bias([v, v, v, 0.0])
}

pub(crate) fn contrast(v: f32) -> ColorMatrix {
    let t = MIDPOINT * (1.0 - v);
    ColorMatrix::from_rgb([[v, 0.0, 0.0], [0.0, v, 0.0], [0.0, 0.0, v]], [t, t, t])
}

/// Lerp each channel between BT.709 grey (`amount = 0`) and itself (`amount = 1`).
pub(crate) fn saturation(amount: f32) -> ColorMatrix {
    let inv = 1.0 - amount;
    let mut linear = [[0.0f32; 3]; 3];
    for (row, out) in linear.iter_mut().enumerate() {
        for (col, entry) in out.iter_mut().enumerate() {
            *entry = inv * LUMA_BT709[col];
            if row == col {
                *entry += amount;
            }
        }
    }
    ColorMatrix::from_rgb(linear, [0.0; 3])
}

pub(crate) fn grayscale(v: f32) -> ColorMatrix {
    saturation(1.0 - v)
}

pub(crate) fn hue(degrees: f32) -> ColorMatrix {
    if degrees == 0.0 {
        return ColorMatrix::IDENTITY;
    }
    let (s, c) = degrees.to_radians().sin_cos();
    let [lr, lg, lb] = LUMA_HUE;

    ColorMatrix::from_rgb(
        [
            [
                lr + c * (1.0 - lr) - s * lr,
                lg - c * lg - s * lg,
                lb - c * lb + s * (1.0 - lb),
            ],
            [
                lr - c * lr + s * 0.143,
                lg + c * (1.0 - lg) + s * 0.140,
                lb - c * lb - s * 0.283,
            ],
            [
                lr - c * lr - s * (1.0 - lr),
                lg - c * lg + s * lg,
                lb + c * (1.0 - lb) + s * lb,
            ],
        ],
        [0.0; 3],
    )
}

/// Binary effects switch on for any positive value; NaN counts as off.
fn switched(v: f32, on: impl FnOnce() -> ColorMatrix) -> ColorMatrix {
    if v > 0.0 {
        on()
    } else {
        ColorMatrix::IDENTITY
    }
}

pub(crate) fn invert(v: f32) -> ColorMatrix {
    switched(v, || {
        ColorMatrix::from_rgb(
            [[-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, -1.0]],
            [CHANNEL_MAX; 3],
        )
    })
}

pub(crate) fn sepia(v: f32) -> ColorMatrix {
    switched(v, || ColorMatrix::from_rgb(SEPIA, [0.0; 3]))
}

pub(crate) fn black_and_white(v: f32) -> ColorMatrix {
    switched(v, || ColorMatrix::from_rgb([LUMA_BT709; 3], [0.0; 3]))
}
