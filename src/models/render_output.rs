//! Serializable views of engine state for the CLI and bridge layers.

use filter_matrix::{css_filter, FilterDefinition, FilterStack};
use serde::Serialize;

/// What the renderer gets for the current stack, plus context for debugging
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RenderOutput {
    /// Composed 4x5 matrix, row-major
    pub matrix: [f32; 20],
    pub blur_radius: f32,
    /// Equivalent CSS filter chain for the web preview
    pub css_filter: String,
    /// Active filters in composition order
    pub filters: Vec<ActiveFilterOutput>,
    /// Sample pixel after the matrix, if one was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pixel: Option<[f32; 4]>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ActiveFilterOutput {
    pub id: String,
    pub value: f32,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CatalogEntryOutput {
    pub id: String,
    pub name: String,
    pub category: String,
    pub min: f32,
    pub max: f32,
    pub default: f32,
}

impl RenderOutput {
    pub fn from_stack(stack: &FilterStack) -> Self {
        let params = stack.render_params();
        Self {
            matrix: params.matrix.into_array(),
            blur_radius: params.blur_radius,
            css_filter: css_filter(stack),
            filters: stack
                .to_list()
                .iter()
                .map(|f| ActiveFilterOutput {
                    id: f.definition_id().to_string(),
                    value: f.value(),
                })
                .collect(),
            pixel: None,
        }
    }

    /// Run `input` through the composed matrix and record the result
    pub fn with_pixel(mut self, input: [f32; 4]) -> Self {
        let matrix = filter_matrix::ColorMatrix::new(self.matrix);
        self.pixel = Some(matrix.apply(input));
        self
    }

    /// Matrix as four text rows, bias column separated by `|`
    pub fn matrix_rows(&self) -> Vec<String> {
        self.matrix
            .chunks(5)
            .map(|row| {
                format!(
                    "[{:>8.4} {:>8.4} {:>8.4} {:>8.4} | {:>8.4}]",
                    row[0], row[1], row[2], row[3], row[4]
                )
            })
            .collect()
    }
}

impl From<&FilterDefinition> for CatalogEntryOutput {
    fn from(def: &FilterDefinition) -> Self {
        Self {
            id: def.id().to_string(),
            name: def.display_name().to_string(),
            category: def.category().to_string(),
            min: def.range().min(),
            max: def.range().max(),
            default: def.range().default_value(),
        }
    }
}
