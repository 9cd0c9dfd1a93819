use crate::assets::AssetLoader;
use crate::error::ConfigError;
use filter_matrix::{FilterCatalog, FilterCategory, FilterDefinition};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Application configuration loaded from catalog.yaml
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Filter definitions, in the order the UI lists them
    #[serde(default = "default_filters")]
    pub filters: Vec<FilterConfig>,

    /// Named looks: ordered filter/value pairs
    #[serde(default)]
    pub presets: BTreeMap<String, Vec<PresetStep>>,
}

/// Configuration for one catalog entry
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FilterConfig {
    /// Stable filter id
    pub id: String,

    /// Display label (defaults to the id)
    #[serde(default)]
    pub name: Option<String>,

    /// color, blur, effect or transform
    #[serde(default = "default_category")]
    pub category: String,

    pub min: f32,
    pub max: f32,
    pub default: f32,
}

fn default_category() -> String {
    "color".to_string()
}

fn default_filters() -> Vec<FilterConfig> {
    FilterCatalog::builtin()
        .iter()
        .map(|def| FilterConfig {
            id: def.id().to_string(),
            name: Some(def.display_name().to_string()),
            category: def.category().as_str().to_string(),
            min: def.range().min(),
            max: def.range().max(),
            default: def.range().default_value(),
        })
        .collect()
}

fn default_presets() -> BTreeMap<String, Vec<PresetStep>> {
    let step = |id: &str, value: f32| PresetStep {
        id: id.to_string(),
        value,
    };

    BTreeMap::from([
        (
            "vivid".to_string(),
            vec![step("saturation", 1.4), step("contrast", 1.1)],
        ),
        (
            "noir".to_string(),
            vec![step("blackAndWhite", 1.0), step("contrast", 1.3)],
        ),
        (
            "faded".to_string(),
            vec![
                step("contrast", 0.8),
                step("brightness", 0.05),
                step("saturation", 0.7),
            ],
        ),
        (
            "warm".to_string(),
            vec![step("sepia", 1.0), step("brightness", 0.05)],
        ),
    ])
}

/// One filter activation inside a preset
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PresetStep {
    pub id: String,
    pub value: f32,
}

impl FilterConfig {
    /// Validate into a catalog definition
    pub fn to_definition(&self) -> Result<FilterDefinition, ConfigError> {
        let category: FilterCategory = self.category.parse()?;
        let name = self.name.clone().unwrap_or_else(|| self.id.clone());
        Ok(FilterDefinition::new(
            self.id.clone(),
            name,
            category,
            self.min,
            self.max,
            self.default,
        )?)
    }
}

impl AppConfig {
    /// Parse configuration from YAML
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from AssetLoader (embedded or external)
    ///
    /// Falls back to defaults on any read, parse or validation failure.
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        let loaded = loader
            .read_config_string()
            .map_err(ConfigError::from)
            .and_then(|content| Self::from_yaml(&content))
            .and_then(|config| config.catalog().map(|_| config));

        match loaded {
            Ok(config) => {
                tracing::info!(
                    filters = config.filters.len(),
                    presets = config.presets.len(),
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load catalog, using defaults");
                Self::default()
            }
        }
    }

    /// Build the validated filter catalog
    pub fn catalog(&self) -> Result<FilterCatalog, ConfigError> {
        let definitions = self
            .filters
            .iter()
            .map(FilterConfig::to_definition)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FilterCatalog::new(definitions)?)
    }

    /// Get a preset by name
    pub fn get_preset(&self, name: &str) -> Option<&[PresetStep]> {
        self.presets.get(name).map(Vec::as_slice)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            filters: default_filters(),
            presets: default_presets(),
        }
    }
}
