use filter_matrix::{CatalogError, StackError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Filter error: {0}")]
    Filter(#[from] StackError),
}
