use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Host configuration. Every field is serde-defaulted so an absent or
/// partial config file still yields a working configuration.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct LibraryConfig {
    /// Path to the watchlist JSON snapshot; defaults to the platform
    /// data directory when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Default pipeline parameters for the list view. Stored as the wire
/// spellings; the host validates them through the engine's parsers at
/// startup so a typo fails loudly instead of falling back silently.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ViewConfig {
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default = "default_sort")]
    pub sort: String,
    #[serde(default = "default_group")]
    pub group: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            sort: default_sort(),
            group: default_group(),
        }
    }
}

pub fn default_filter() -> String {
    "all".to_string()
}

pub fn default_sort() -> String {
    "date-added".to_string()
}

pub fn default_group() -> String {
    "none".to_string()
}

impl Config {
    /// Load from `path`, falling back to defaults when the file does
    /// not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file at {}", path.display()))
    }
}
