//! Test fixtures and constants.

use snapfx::models::AppConfig;
use snapfx::services::{EditingSession, UiEvent};
use std::sync::Arc;

/// Sample pixels, normalized RGBA
pub mod pixels {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const MID_GREY: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
    pub const HALF_TRANSPARENT_RED: [f32; 4] = [0.8, 0.0, 0.0, 0.5];
}

/// A catalog with one custom filter, for file-override tests
pub const CUSTOM_CATALOG_YAML: &str = r#"
filters:
  - id: brightness
    min: -0.5
    max: 0.5
    default: 0
  - id: invert
    name: Negative
    category: effect
    min: 0
    max: 1
    default: 0
presets:
  negative:
    - { id: invert, value: 1 }
    - { id: brightness, value: 0.2 }
"#;

/// Session over the built-in catalog and presets
pub fn session() -> EditingSession {
    EditingSession::from_config(Arc::new(AppConfig::default()))
        .expect("default config builds a catalog")
}

/// Activate `id` and set its value in one go
pub fn apply(session: &mut EditingSession, id: &str, value: f32) {
    session.handle(UiEvent::Activate(id.to_string()));
    session.handle(UiEvent::SetValue {
        id: id.to_string(),
        value,
    });
}

pub fn active_ids(session: &EditingSession) -> Vec<String> {
    session
        .stack()
        .to_list()
        .iter()
        .map(|f| f.definition_id().to_string())
        .collect()
}
