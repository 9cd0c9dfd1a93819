//! The closed set of filter kinds the engine knows how to render.

use super::formulas;
use crate::matrix::ColorMatrix;

/// A filter the engine recognizes by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Additive lift of R, G, B
    Brightness,
    /// Scale around mid-grey
    Contrast,
    /// Lerp between luminance grey and the original color
    Saturation,
    /// Luminance-preserving rotation, value in degrees
    Hue,
    /// Lerp from the original color toward luminance grey
    Grayscale,
    /// `x -> 1 - x` on R, G, B when on
    Invert,
    /// Fixed sepia tone when on
    Sepia,
    /// Fixed luminance replication when on
    BlackAndWhite,
    /// Spatial blur; the value is a radius, not a color transform
    Blur,
    /// Reserved, no color matrix
    Sharpen,
    /// Reserved, no color matrix
    Vintage,
}

impl FilterKind {
    /// Every kind, in catalog order.
    pub const ALL: [FilterKind; 11] = [
        FilterKind::Brightness,
        FilterKind::Contrast,
        FilterKind::Saturation,
        FilterKind::Hue,
        FilterKind::Blur,
        FilterKind::Sharpen,
        FilterKind::Vintage,
        FilterKind::BlackAndWhite,
        FilterKind::Sepia,
        FilterKind::Invert,
        FilterKind::Grayscale,
    ];

    /// Resolve a filter id. Ids are case-sensitive.
    pub fn from_id(id: &str) -> Option<Self> {
        Some(match id {
            "brightness" => FilterKind::Brightness,
            "contrast" => FilterKind::Contrast,
            "saturation" => FilterKind::Saturation,
            "hue" => FilterKind::Hue,
            "grayscale" => FilterKind::Grayscale,
            "invert" => FilterKind::Invert,
            "sepia" => FilterKind::Sepia,
            "blackAndWhite" => FilterKind::BlackAndWhite,
            "blur" => FilterKind::Blur,
            "sharpen" => FilterKind::Sharpen,
            "vintage" => FilterKind::Vintage,
            _ => return None,
        })
    }

    /// The id this kind is registered under.
    pub fn id(self) -> &'static str {
        match self {
            FilterKind::Brightness => "brightness",
            FilterKind::Contrast => "contrast",
            FilterKind::Saturation => "saturation",
            FilterKind::Hue => "hue",
            FilterKind::Grayscale => "grayscale",
            FilterKind::Invert => "invert",
            FilterKind::Sepia => "sepia",
            FilterKind::BlackAndWhite => "blackAndWhite",
            FilterKind::Blur => "blur",
            FilterKind::Sharpen => "sharpen",
            FilterKind::Vintage => "vintage",
        }
    }

    /// Whether this kind contributes to the composed color matrix.
    pub fn is_color_transform(self) -> bool {
        !matches!(
            self,
            FilterKind::Blur | FilterKind::Sharpen | FilterKind::Vintage
        )
    }

    /// On/off effects where any positive value means fully on.
    pub fn is_binary(self) -> bool {
        matches!(
            self,
            FilterKind::Invert | FilterKind::Sepia | FilterKind::BlackAndWhite
        )
    }

    /// The color matrix for this kind at `value`.
    pub fn matrix(self, value: f32) -> ColorMatrix {
        match self {
            FilterKind::Brightness => formulas::brightness(value),
            FilterKind::Contrast => formulas::contrast(value),
            FilterKind::Saturation => formulas::saturation(value),
            FilterKind::Hue => formulas::hue(value),
            FilterKind::Grayscale => formulas::grayscale(value),
            FilterKind::Invert => formulas::invert(value),
            FilterKind::Sepia => formulas::sepia(value),
            FilterKind::BlackAndWhite => formulas::black_and_white(value),
            FilterKind::Blur | FilterKind::Sharpen | FilterKind::Vintage => ColorMatrix::IDENTITY,
        }
    }
}
