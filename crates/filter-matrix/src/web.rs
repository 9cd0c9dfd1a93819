//! CSS `filter` fallback for renderers without color-matrix support.
//!
//! Browsers cannot take a raw 4x5 matrix on an `<img>`, so the web preview
//! expresses the stack as a chain of CSS filter functions instead. The
//! result is close to, but not bit-identical with, the matrix path: CSS
//! uses its own luminance constants for `saturate` and `grayscale`.

use crate::builder::FilterKind;
use crate::stack::FilterStack;

/// Render the active filters as a CSS `filter` property value.
///
/// Functions appear in stack order, separated by single spaces. Filters
/// with no CSS equivalent (`sharpen`, `vintage`, custom ids) are skipped,
/// as are binary effects that are switched off. An empty stack yields an
/// empty string.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use filter_matrix::{css_filter, FilterCatalog, FilterStack};
///
/// let mut stack = FilterStack::new(Arc::new(FilterCatalog::builtin()));
/// stack.activate("brightness").unwrap();
/// stack.set_value("brightness", 0.5).unwrap();
/// stack.activate("blur").unwrap();
/// stack.set_value("blur", 2.0).unwrap();
///
/// assert_eq!(css_filter(&stack), "brightness(1.5) blur(2px)");
/// ```
pub fn css_filter(stack: &FilterStack) -> String {
    stack
        .to_list()
        .iter()
        .filter_map(|f| css_function(f.kind()?, f.value()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn css_function(kind: FilterKind, v: f32) -> Option<String> {
    let on = v > 0.0;
    Some(match kind {
        FilterKind::Brightness => format!("brightness({})", 1.0 + v),
        FilterKind::Contrast => format!("contrast({})", v),
        FilterKind::Saturation => format!("saturate({})", v),
        FilterKind::Hue => format!("hue-rotate({}deg)", v),
        FilterKind::Blur => format!("blur({}px)", v),
        FilterKind::Grayscale => format!("grayscale({})", v),
        FilterKind::BlackAndWhite if on => "grayscale(1)".to_string(),
        FilterKind::Sepia if on => "sepia(1)".to_string(),
        FilterKind::Invert if on => "invert(1)".to_string(),
        _ => return None,
    })
}
