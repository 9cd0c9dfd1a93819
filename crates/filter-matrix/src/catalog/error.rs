//! Error types for catalog construction

use std::fmt;

/// Error type for invalid filter definitions or catalogs.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// A definition had an empty id
    EmptyId,
    /// Range bounds or default were NaN or infinite
    NonFiniteRange {
        /// Offending filter id
        id: String,
    },
    /// `min` was greater than `max`
    InvertedRange {
        /// Offending filter id
        id: String,
        /// Lower bound as given
        min: f32,
        /// Upper bound as given
        max: f32,
    },
    /// Default value was outside `[min, max]`
    DefaultOutOfRange {
        /// Offending filter id
        id: String,
        /// Default value as given
        default: f32,
    },
    /// The same id appeared twice in one catalog
    DuplicateId {
        /// The repeated id
        id: String,
    },
    /// A category name could not be parsed
    UnknownCategory(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::EmptyId => write!(f, "filter id cannot be empty"),
            CatalogError::NonFiniteRange { id } => {
                write!(f, "filter '{}' has a non-finite range", id)
            }
            CatalogError::InvertedRange { id, min, max } => {
                write!(f, "filter '{}' has min {} greater than max {}", id, min, max)
            }
            CatalogError::DefaultOutOfRange { id, default } => {
                write!(f, "filter '{}' default {} is outside its range", id, default)
            }
            CatalogError::DuplicateId { id } => {
                write!(f, "duplicate filter id '{}'", id)
            }
            CatalogError::UnknownCategory(name) => {
                write!(f, "unknown filter category '{}'", name)
            }
        }
    }
}

impl std::error::Error for CatalogError {}
