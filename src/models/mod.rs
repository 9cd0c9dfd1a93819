pub mod config;
pub mod render_output;

pub use config::{AppConfig, FilterConfig, PresetStep};
pub use render_output::{ActiveFilterOutput, CatalogEntryOutput, RenderOutput};
