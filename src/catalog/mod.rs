//! Read-only reference data consumed by the query parser: language codes and engine registry.

mod engines;
mod languages;

pub use engines::{Engine, EngineRegistry};
pub use languages::{LanguageCatalog, LanguageCode};

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

/// Environment variable naming a catalog file, used when no path is given explicitly.
pub const CATALOG_ENV: &str = "BANGQUERY_CATALOG";

const BUILTIN: &str = include_str!("builtin.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Language catalog plus engine registry. Shared immutably across parses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub languages: LanguageCatalog,
    #[serde(default)]
    pub engines: EngineRegistry,
}

impl Catalog {
    pub fn new(languages: LanguageCatalog, engines: EngineRegistry) -> Self {
        Self { languages, engines }
    }

    /// Catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN)
    }

    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&text)?;
        debug!(
            path = %path.display(),
            languages = catalog.languages.len(),
            engines = catalog.engines.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Load from `path`, else from `$BANGQUERY_CATALOG`, else the builtin catalog.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match catalog_path(path, std::env::var(CATALOG_ENV).ok()) {
            Some(path) => Self::from_path(&path),
            None => Self::builtin(),
        }
    }
}

/// An explicit path wins over the environment value; blank env values are ignored.
fn catalog_path(explicit: Option<&Path>, env_value: Option<String>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| {
        env_value
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    })
}
