//! Filter definition types

use std::fmt;
use std::str::FromStr;

use super::error::CatalogError;

/// Number of stepper increments across a full range.
const STEPS_PER_RANGE: f32 = 20.0;

/// Informational grouping of a filter.
///
/// Only [`FilterCategory::Blur`] changes how the engine treats a filter:
/// blur never becomes a color matrix and is handed to the renderer as a
/// radius instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterCategory {
    /// Per-pixel color adjustments (brightness, contrast, ...)
    Color,
    /// Spatial blur, passed through as a radius
    Blur,
    /// On/off looks such as sepia or invert
    Effect,
    /// Geometric transforms (reserved)
    Transform,
}

impl FilterCategory {
    /// Lowercase name used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterCategory::Color => "color",
            FilterCategory::Blur => "blur",
            FilterCategory::Effect => "effect",
            FilterCategory::Transform => "transform",
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "color" => Ok(FilterCategory::Color),
            "blur" => Ok(FilterCategory::Blur),
            "effect" => Ok(FilterCategory::Effect),
            "transform" => Ok(FilterCategory::Transform),
            other => Err(CatalogError::UnknownCategory(other.to_string())),
        }
    }
}

/// Inclusive value bounds and the neutral default of a filter.
///
/// Always satisfies `min <= default <= max` with all three finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    min: f32,
    max: f32,
    default: f32,
}

impl ValueRange {
    fn validate(id: &str, min: f32, max: f32, default: f32) -> Result<Self, CatalogError> {
        if !(min.is_finite() && max.is_finite() && default.is_finite()) {
            return Err(CatalogError::NonFiniteRange { id: id.to_string() });
        }
        if min > max {
            return Err(CatalogError::InvertedRange {
                id: id.to_string(),
                min,
                max,
            });
        }
        if default < min || default > max {
            return Err(CatalogError::DefaultOutOfRange {
                id: id.to_string(),
                default,
            });
        }
        Ok(Self { min, max, default })
    }

    /// Lower bound (inclusive).
    #[inline]
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound (inclusive).
    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Value a freshly activated filter starts with.
    #[inline]
    pub fn default_value(&self) -> f32 {
        self.default
    }

    /// Whether `value` lies within the bounds.
    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp `value` into the bounds. Infinities clamp to the nearest bound.
    ///
    /// NaN passes through unchanged; callers decide what to do with it.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Position of `value` along the range as `0.0..=1.0` (slider thumb position).
    ///
    /// A degenerate range (`min == max`) and NaN both report `0.0`.
    pub fn ratio(&self, value: f32) -> f32 {
        let span = self.max - self.min;
        if span <= 0.0 || value.is_nan() {
            return 0.0;
        }
        ((self.clamp(value) - self.min) / span).clamp(0.0, 1.0)
    }

    /// Value at slider position `ratio`, clamped to `0.0..=1.0` first.
    pub fn value_at_ratio(&self, ratio: f32) -> f32 {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        self.clamp(self.min + ratio * (self.max - self.min))
    }

    /// Increment used by the +/- stepper buttons: a twentieth of the span.
    #[inline]
    pub fn step(&self) -> f32 {
        (self.max - self.min) / STEPS_PER_RANGE
    }
}

/// An immutable catalog entry describing one available filter.
///
/// # Example
///
/// ```
/// use filter_matrix::{FilterCategory, FilterDefinition};
///
/// let def =
///     FilterDefinition::new("brightness", "Brightness", FilterCategory::Color, -1.0, 1.0, 0.0)
///         .unwrap();
/// assert_eq!(def.range().clamp(3.0), 1.0);
///
/// // Default outside the range is rejected
/// assert!(FilterDefinition::new("x", "X", FilterCategory::Color, 0.0, 1.0, 2.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDefinition {
    id: String,
    display_name: String,
    category: FilterCategory,
    range: ValueRange,
}

impl FilterDefinition {
    /// Create a definition, validating its range.
    ///
    /// # Errors
    /// Returns [`CatalogError`] if the id is empty, any bound is not finite,
    /// `min > max`, or `default` is outside `[min, max]`.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        category: FilterCategory,
        min: f32,
        max: f32,
        default: f32,
    ) -> Result<Self, CatalogError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CatalogError::EmptyId);
        }
        let range = ValueRange::validate(&id, min, max, default)?;
        Ok(Self {
            id,
            display_name: display_name.into(),
            category,
            range,
        })
    }

    /// Construct a definition from constants known to be valid.
    pub(crate) fn builtin(
        id: &str,
        display_name: &str,
        category: FilterCategory,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        debug_assert!(min <= default && default <= max, "bad builtin range for {}", id);
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            category,
            range: ValueRange { min, max, default },
        }
    }

    /// Stable key, e.g. `"brightness"`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Informational category.
    pub fn category(&self) -> FilterCategory {
        self.category
    }

    /// Bounds and default value.
    pub fn range(&self) -> &ValueRange {
        &self.range
    }
}
