//! Catalog asset loading with an embedded fallback
//!
//! - If `CATALOG_FILE` is NOT set: use the embedded `catalog.yaml` only
//! - If it IS set and the file is missing: seed it with the embedded copy, then use it
//! - If it IS set and the file exists: use the file

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the embedded default catalog.
pub const CATALOG_FILE_NAME: &str = "catalog.yaml";

/// Embedded default catalog
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "catalog.yaml"]
struct EmbeddedCatalog;

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Catalog loader with optional filesystem override
pub struct AssetLoader {
    /// External catalog path (from CATALOG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// `config_file` should be `Some` only if the env var was set.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self { config_file }
    }

    /// Create a loader from the `CATALOG_FILE` environment variable
    pub fn from_env() -> Self {
        Self::new(std::env::var("CATALOG_FILE").ok().map(PathBuf::from))
    }

    /// The configured external path, if any
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// The embedded default catalog
    pub fn embedded_catalog() -> io::Result<Cow<'static, [u8]>> {
        EmbeddedCatalog::get(CATALOG_FILE_NAME)
            .map(|f| f.data)
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded catalog.yaml not found")
            })
    }

    /// Read the catalog file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to the embedded catalog.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading catalog from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
        }

        tracing::trace!("Loading catalog from embedded assets");
        Self::embedded_catalog()
    }

    /// Read the catalog as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Write the embedded catalog to the configured path if it is missing
    ///
    /// Returns whether a file was written.
    pub fn seed_if_configured(&self) -> io::Result<bool> {
        let Some(ref path) = self.config_file else {
            return Ok(false);
        };
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &*Self::embedded_catalog()?)?;
        tracing::info!(path = %path.display(), "Seeded catalog file with embedded default");
        Ok(true)
    }

    /// Extract the embedded catalog (init command)
    ///
    /// Writes to the configured path, or `./catalog.yaml` if none is set.
    pub fn init(&self, force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();
        let path = self
            .config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("./{CATALOG_FILE_NAME}")));

        if !force && path.exists() {
            report.skipped.push(path.display().to_string());
            return Ok(report);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &*Self::embedded_catalog()?)?;
        report.written.push(path.display().to_string());
        Ok(report)
    }

    /// List embedded assets (for display)
    pub fn list_embedded() -> Vec<String> {
        let mut files: Vec<String> = EmbeddedCatalog::iter().map(|f| f.to_string()).collect();
        files.sort();
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_catalog_present() {
        let data = AssetLoader::embedded_catalog().unwrap();
        let text = std::str::from_utf8(&data).unwrap();
        assert!(text.contains("filters:"));
        assert!(text.contains("id: brightness"));
        assert_eq!(AssetLoader::list_embedded(), vec!["catalog.yaml".to_string()]);
    }

    #[test]
    fn test_read_without_override_uses_embedded() {
        let loader = AssetLoader::new(None);
        let text = loader.read_config_string().unwrap();
        assert!(text.contains("presets:"));
    }

    #[test]
    fn test_read_prefers_external_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.yaml");
        fs::write(&path, "filters: []\n").unwrap();

        let loader = AssetLoader::new(Some(path));
        assert_eq!(loader.read_config_string().unwrap(), "filters: []\n");
    }

    #[test]
    fn test_read_missing_external_falls_back() {
        let dir = TempDir::new().unwrap();
        let loader = AssetLoader::new(Some(dir.path().join("missing.yaml")));
        assert!(loader.read_config_string().unwrap().contains("id: hue"));
    }

    #[test]
    fn test_seed_if_configured() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("catalog.yaml");
        let loader = AssetLoader::new(Some(path.clone()));

        assert!(loader.seed_if_configured().unwrap());
        assert!(path.exists());
        // second call leaves the file alone
        assert!(!loader.seed_if_configured().unwrap());
    }

    #[test]
    fn test_seed_without_config_is_noop() {
        assert!(!AssetLoader::new(None).seed_if_configured().unwrap());
    }

    #[test]
    fn test_init_skips_existing_unless_forced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.yaml");
        fs::write(&path, "mine").unwrap();
        let loader = AssetLoader::new(Some(path.clone()));

        let report = loader.init(false).unwrap();
        assert_eq!(report.skipped.len(), 1);
        assert!(report.written.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "mine");

        let report = loader.init(true).unwrap();
        assert_eq!(report.written.len(), 1);
        assert!(fs::read_to_string(&path).unwrap().contains("filters:"));
    }
}
