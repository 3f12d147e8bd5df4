use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for the `elig` command line tool.
///
/// Every setting can be overridden by a command line flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Path to the company catalog used when none is given explicitly.
    ///
    /// Relative paths are resolved against the directory containing the
    /// configuration file. When unset, the built-in sample catalog is used.
    catalog: Option<PathBuf>,

    /// Whether `check` prints the per-company requirement breakdown.
    pub detailed: bool,
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// A relative `catalog` path is resolved against the file's directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        let mut config: Self =
            toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))?;

        if let (Some(catalog), Some(dir)) = (config.catalog.as_mut(), path.parent()) {
            if catalog.is_relative() {
                *catalog = dir.join(&*catalog);
            }
        }

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// The configured default catalog, if any.
    #[must_use]
    pub fn catalog(&self) -> Option<&Path> {
        self.catalog.as_deref()
    }

    /// Sets the default catalog path.
    pub fn set_catalog(&mut self, catalog: Option<PathBuf>) {
        self.catalog = catalog;
    }
}

/// The serialized versions of the configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        catalog: Option<PathBuf>,

        #[serde(default)]
        detailed: bool,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 { catalog, detailed } => Self { catalog, detailed },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            catalog: config.catalog,
            detailed: config.detailed,
        }
    }
}
