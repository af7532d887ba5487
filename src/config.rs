//! Site configuration module.
//!
//! Handles loading and validating the optional `config.toml` at the
//! recipe root. Every key is optional; anything left out keeps its stock
//! default.
//!
//! ## Configuration Options
//!
//! ```toml
//! stylesheet = "Stylesheet.css"     # Shared stylesheet, relative to the root
//! index_file = "Index.html"         # Index page written at the root
//! index_title = "Recipe Collection" # <title> and <h1> of the index page
//! source_extension = "txt"          # Recipe source files (case-insensitive)
//! image_extensions = ["jpg", "jpeg", "png", "webp"]  # Probed in this order
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Stylesheet every generated page links to, relative to the root.
    pub stylesheet: String,
    /// File name of the index page. Entries with this name are never listed.
    pub index_file: String,
    pub index_title: String,
    /// Extension (without the dot) of recipe source files.
    pub source_extension: String,
    /// Image extensions probed next to each recipe, first match wins.
    pub image_extensions: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            stylesheet: "Stylesheet.css".to_string(),
            index_file: "Index.html".to_string(),
            index_title: "Recipe Collection".to_string(),
            source_extension: "txt".to_string(),
            image_extensions: ["jpg", "jpeg", "png", "webp"]
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stylesheet.trim().is_empty() {
            return Err(ConfigError::Validation(
                "stylesheet must not be empty".into(),
            ));
        }
        if self.index_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "index_file must not be empty".into(),
            ));
        }
        if self.source_extension.is_empty() || self.source_extension.starts_with('.') {
            return Err(ConfigError::Validation(
                "source_extension must be non-empty and written without a leading dot".into(),
            ));
        }
        if self.image_extensions.is_empty() {
            return Err(ConfigError::Validation(
                "image_extensions must not be empty".into(),
            ));
        }
        if let Some(bad) = self
            .image_extensions
            .iter()
            .find(|e| e.is_empty() || e.starts_with('.'))
        {
            return Err(ConfigError::Validation(format!(
                "image_extensions entry {bad:?} must be non-empty and written without a leading dot"
            )));
        }
        Ok(())
    }
}

/// A [`SiteConfig`] bound to the root directory it was loaded for.
///
/// This is what the converter, renderer, and indexer receive instead of
/// process-wide constants.
#[derive(Debug, Clone)]
pub struct Site {
    pub root: PathBuf,
    pub config: SiteConfig,
}

impl Site {
    pub fn new(root: impl Into<PathBuf>, config: SiteConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Load `config.toml` from `root` (stock defaults when absent).
    pub fn load(root: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let root = root.into();
        let config = load_config(&root)?;
        Ok(Self { root, config })
    }

    /// Location of the shared stylesheet.
    pub fn stylesheet_path(&self) -> PathBuf {
        self.root.join(&self.config.stylesheet)
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(&self.config.index_file)
    }
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Load and validate `config.toml` from `root`.
///
/// Keys left out of the file keep their stock defaults; a missing file gives
/// [`SiteConfig::default`].
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str::<SiteConfig>(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    tracing::debug!(?config, "loaded site config");
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Recipes Configuration
# ============================
# All settings are optional. Values shown below are the defaults.
# Place this file at the recipe root as config.toml.
# Unknown keys will cause an error.

# Shared stylesheet linked from every page, relative to the root.
stylesheet = "Stylesheet.css"

# Index page written at the root. Entries with this name are never listed.
index_file = "Index.html"

# Heading and <title> of the index page.
index_title = "Recipe Collection"

# Extension of recipe source files, matched case-insensitively.
source_extension = "txt"

# Image extensions looked up next to each recipe (<name>.<ext>), in order.
image_extensions = ["jpg", "jpeg", "png", "webp"]
"##
}
