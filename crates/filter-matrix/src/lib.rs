#![allow(clippy::module_inception)]

//! filter-matrix: color-matrix filter compositing for photo editing
//!
//! Turns an ordered stack of named filters (brightness, contrast, hue, ...)
//! into one 4x5 color matrix plus a blur radius that a renderer applies in
//! a single pass.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use filter_matrix::{FilterCatalog, FilterStack};
//!
//! let catalog = Arc::new(FilterCatalog::builtin());
//! let mut stack = FilterStack::new(catalog);
//!
//! stack.activate("saturation").unwrap();
//! stack.set_value("saturation", 0.0).unwrap();
//! stack.activate("blur").unwrap();
//! stack.set_value("blur", 2.5).unwrap();
//!
//! let params = stack.render_params();
//! let grey = params.matrix.apply([1.0, 0.0, 0.0, 1.0]);
//! assert!((grey[0] - 0.2126).abs() < 1e-6);
//! assert_eq!(params.blur_radius, 2.5);
//! ```
//!
//! # Components
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Immutable [`FilterDefinition`]s: id, label, category, range |
//! | [`builder`] | [`build_matrix`]: one filter and value to one [`ColorMatrix`] |
//! | [`matrix`] | [`ColorMatrix`] and [`compose`] |
//! | [`stack`] | [`FilterStack`]: the user's active filters, in order |
//! | [`web`] | [`css_filter`]: CSS fallback for the web preview |
//!
//! # Color Space
//!
//! Every formula works on channels normalized to `0.0..=1.0`. The contrast
//! pivot is `0.5` and the invert bias is `1.0`. Mixing in 8-bit constants
//! (`128`, `255`) anywhere silently breaks composition, because bias terms
//! from different filters are added together.
//!
//! # Composition Order
//!
//! Filters are appended to the stack when activated, and the stack is
//! composed front to back. `a.then(&b)` means "apply `a`, then `b`":
//!
//! ```text
//! C_linear = B_linear * A_linear
//! C_bias   = B_linear * A_bias + B_bias
//! ```
//!
//! Color matrices do not commute. Invert followed by brightening is not
//! the same as brightening followed by invert. Reordering the stack
//! changes the image.
//!
//! # Blur
//!
//! Blur is not a color transform. Its value travels to the renderer as
//! [`RenderParams::blur_radius`] and the builder returns identity for it.

pub mod builder;
pub mod catalog;
pub mod matrix;
pub mod stack;
pub mod web;


pub use builder::{build_matrix, FilterKind};
pub use catalog::{CatalogError, FilterCatalog, FilterCategory, FilterDefinition, ValueRange};
pub use matrix::{compose, ColorMatrix, MatrixError};
pub use stack::{
    ActiveFilter, Activation, FilterStack, RenderParams, StackError, StepDirection, Toggle,
    ValueUpdate,
};
pub use web::css_filter;
