//! Filter definitions and the catalog that holds them.
//!
//! The catalog is loaded once and never mutated; stacks hold a shared
//! handle to it and look up ranges and defaults by filter id.

mod catalog;
mod definition;
mod error;

pub use catalog::FilterCatalog;
pub use definition::{FilterCategory, FilterDefinition, ValueRange};
pub use error::CatalogError;
