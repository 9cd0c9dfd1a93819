//! The filter catalog

use std::collections::HashSet;

use super::definition::{FilterCategory, FilterDefinition};
use super::error::CatalogError;

/// Read-only registry of the filters a user can activate.
///
/// Ids are unique. Iteration order is the order definitions were given,
/// which is the order a UI should list them in.
///
/// # Example
///
/// ```
/// use filter_matrix::FilterCatalog;
///
/// let catalog = FilterCatalog::builtin();
/// let contrast = catalog.get("contrast").unwrap();
/// assert_eq!(contrast.range().default_value(), 1.0);
/// assert!(catalog.get("glow").is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCatalog {
    definitions: Vec<FilterDefinition>,
}

impl FilterCatalog {
    /// Create a catalog from definitions.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateId`] if two definitions share an id.
    pub fn new(definitions: Vec<FilterDefinition>) -> Result<Self, CatalogError> {
        {
            let mut seen = HashSet::with_capacity(definitions.len());
            for def in &definitions {
                if !seen.insert(def.id()) {
                    return Err(CatalogError::DuplicateId {
                        id: def.id().to_string(),
                    });
                }
            }
        }
        Ok(Self { definitions })
    }

    /// The stock filter set of the editor.
    pub fn builtin() -> Self {
        use FilterCategory::{Blur, Color, Effect};

        let definitions = vec![
            FilterDefinition::builtin("brightness", "Brightness", Color, -1.0, 1.0, 0.0),
            FilterDefinition::builtin("contrast", "Contrast", Color, 0.0, 2.0, 1.0),
            FilterDefinition::builtin("saturation", "Saturation", Color, 0.0, 2.0, 1.0),
            FilterDefinition::builtin("hue", "Hue", Color, -180.0, 180.0, 0.0),
            FilterDefinition::builtin("blur", "Blur", Blur, 0.0, 10.0, 0.0),
            FilterDefinition::builtin("sharpen", "Sharpen", Effect, 0.0, 1.0, 0.0),
            FilterDefinition::builtin("vintage", "Vintage", Effect, 0.0, 1.0, 0.0),
            FilterDefinition::builtin("blackAndWhite", "Black & White", Effect, 0.0, 1.0, 0.0),
            FilterDefinition::builtin("sepia", "Sepia", Effect, 0.0, 1.0, 0.0),
            FilterDefinition::builtin("invert", "Invert", Effect, 0.0, 1.0, 0.0),
            FilterDefinition::builtin("grayscale", "Grayscale", Color, 0.0, 1.0, 0.0),
        ];
        Self { definitions }
    }

    /// Look up a definition by id.
    pub fn get(&self, id: &str) -> Option<&FilterDefinition> {
        self.definitions.iter().find(|d| d.id() == id)
    }

    /// Whether `id` names a definition in this catalog.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &FilterDefinition> {
        self.definitions.iter()
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the catalog has no definitions.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for FilterCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
