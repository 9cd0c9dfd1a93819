//! Filter stack implementation

use std::sync::Arc;

use super::error::StackError;
use super::render::RenderParams;
use crate::builder::{build_matrix, FilterKind};
use crate::catalog::{FilterCatalog, FilterDefinition};
use crate::matrix::{compose, ColorMatrix};

/// One activated filter and its current value.
///
/// The value is always inside the definition's range; only
/// [`FilterStack`] can create or change it.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveFilter {
    definition_id: String,
    value: f32,
}

impl ActiveFilter {
    /// Id of the catalog definition this filter instantiates.
    pub fn definition_id(&self) -> &str {
        &self.definition_id
    }

    /// Current value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The engine kind, if the id is one the builder understands.
    pub fn kind(&self) -> Option<FilterKind> {
        FilterKind::from_id(&self.definition_id)
    }

    /// Color matrix contributed by this filter.
    pub fn matrix(&self) -> ColorMatrix {
        build_matrix(&self.definition_id, self.value)
    }
}

/// Result of [`FilterStack::activate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Appended with the definition's default value
    Inserted,
    /// Was already active; nothing changed
    AlreadyActive,
}

/// Result of [`FilterStack::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The filter was inactive and is now active
    Activated,
    /// The filter was active and has been removed
    Deactivated,
}

/// Result of [`FilterStack::set_value`] and [`FilterStack::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueUpdate {
    /// The value was stored; `clamped` is set if it had to be pulled into range
    Applied {
        /// The value now held by the filter
        value: f32,
        /// Whether the requested value was outside the range
        clamped: bool,
    },
    /// The filter is in the catalog but not active; nothing changed
    NotActive,
    /// The requested value was NaN; nothing changed
    Ignored,
}

/// Direction for [`FilterStack::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Increase by one step
    Up,
    /// Decrease by one step
    Down,
}

/// The ordered set of active filters for one editing session.
///
/// Newly activated filters are appended, and composition runs front to
/// back: the filter activated first is applied to the pixel first.
/// An id appears at most once, and only ids present in the catalog are
/// ever admitted.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use filter_matrix::{FilterCatalog, FilterStack};
///
/// let mut stack = FilterStack::new(Arc::new(FilterCatalog::builtin()));
/// stack.activate("invert").unwrap();
/// stack.set_value("invert", 1.0).unwrap();
/// stack.activate("brightness").unwrap();
/// stack.set_value("brightness", 0.2).unwrap();
///
/// // invert first, then brighten
/// let out = stack.matrix().apply([1.0, 0.0, 0.0, 1.0]);
/// assert!((out[0] - 0.2).abs() < 1e-6);
/// assert!((out[1] - 1.2).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct FilterStack {
    catalog: Arc<FilterCatalog>,
    filters: Vec<ActiveFilter>,
}

impl FilterStack {
    /// Create an empty stack backed by `catalog`.
    pub fn new(catalog: Arc<FilterCatalog>) -> Self {
        Self {
            catalog,
            filters: Vec::new(),
        }
    }

    /// The catalog this stack validates ids against.
    pub fn catalog(&self) -> &Arc<FilterCatalog> {
        &self.catalog
    }

    fn definition(&self, id: &str) -> Result<&FilterDefinition, StackError> {
        self.catalog
            .get(id)
            .ok_or_else(|| StackError::UnknownFilter(id.to_string()))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.filters.iter().position(|f| f.definition_id == id)
    }

    /// Activate a filter at its default value.
    ///
    /// # Errors
    /// Returns [`StackError::UnknownFilter`] if `id` is not in the catalog.
    pub fn activate(&mut self, id: &str) -> Result<Activation, StackError> {
        let default = self.definition(id)?.range().default_value();
        if self.is_active(id) {
            return Ok(Activation::AlreadyActive);
        }
        self.filters.push(ActiveFilter {
            definition_id: id.to_string(),
            value: default,
        });
        Ok(Activation::Inserted)
    }

    /// Remove a filter. Returns whether it was active.
    pub fn deactivate(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.filters.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Activate the filter if inactive, otherwise remove it.
    ///
    /// # Errors
    /// Returns [`StackError::UnknownFilter`] if `id` is not in the catalog.
    pub fn toggle(&mut self, id: &str) -> Result<Toggle, StackError> {
        if self.deactivate(id) {
            return Ok(Toggle::Deactivated);
        }
        self.activate(id)?;
        Ok(Toggle::Activated)
    }

    /// Set the value of an active filter, clamping it into range.
    ///
    /// Infinite values clamp to the nearest bound. NaN is ignored.
    ///
    /// # Errors
    /// Returns [`StackError::UnknownFilter`] if `id` is not in the catalog.
    pub fn set_value(&mut self, id: &str, value: f32) -> Result<ValueUpdate, StackError> {
        let range = *self.definition(id)?.range();
        let Some(idx) = self.position(id) else {
            return Ok(ValueUpdate::NotActive);
        };
        if value.is_nan() {
            return Ok(ValueUpdate::Ignored);
        }

        let clamped = range.clamp(value);
        self.filters[idx].value = clamped;
        Ok(ValueUpdate::Applied {
            value: clamped,
            clamped: clamped != value,
        })
    }

    /// Nudge an active filter by one stepper increment (a twentieth of its range).
    ///
    /// # Errors
    /// Returns [`StackError::UnknownFilter`] if `id` is not in the catalog.
    pub fn step(&mut self, id: &str, direction: StepDirection) -> Result<ValueUpdate, StackError> {
        let step = self.definition(id)?.range().step();
        let Some(current) = self.value(id) else {
            return Ok(ValueUpdate::NotActive);
        };
        let target = match direction {
            StepDirection::Up => current + step,
            StepDirection::Down => current - step,
        };
        self.set_value(id, target)
    }

    /// Current value of an active filter.
    pub fn value(&self, id: &str) -> Option<f32> {
        self.filters
            .iter()
            .find(|f| f.definition_id == id)
            .map(|f| f.value)
    }

    /// Whether a filter is active.
    pub fn is_active(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Active filters in composition order.
    pub fn to_list(&self) -> &[ActiveFilter] {
        &self.filters
    }

    /// Number of active filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether no filter is active.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Deactivate everything.
    pub fn clear(&mut self) {
        self.filters.clear();
    }

    /// Compose all active filters into one matrix, in stack order.
    pub fn matrix(&self) -> ColorMatrix {
        compose(self.filters.iter().map(ActiveFilter::matrix))
    }

    /// Radius of the active blur filter, or `0.0` if there is none.
    pub fn blur_radius(&self) -> f32 {
        self.filters
            .iter()
            .find(|f| f.kind() == Some(FilterKind::Blur))
            .map_or(0.0, |f| f.value.max(0.0))
    }

    /// Everything the renderer needs for the current stack.
    pub fn render_params(&self) -> RenderParams {
        RenderParams {
            matrix: self.matrix(),
            blur_radius: self.blur_radius(),
        }
    }
}
