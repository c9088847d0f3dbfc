//! Bookshelf Configuration System
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `BOOKSHELF_*` environment variables, then command-line flags.
//!
//! Each section implements [`ConfigSection`]. A broken file can fall back to
//! defaults with a warning, and saves replace the file atomically.
//!
//! # Example
//!
//! ```rust,no_run
//! use bookshelf_config::{Config, ConfigManager};
//!
//! let manager = ConfigManager::new().expect("Failed to initialize config");
//! let mut config = manager.load_or_default();
//! config.apply_env_overrides(|key| std::env::var(key).ok());
//!
//! println!("Catalog: {}", config.catalog.path.display());
//! ```

mod error;
mod manager;
pub mod validation;

// Config sections
pub mod app_config;
pub mod catalog_config;

pub use error::{ConfigError, ConfigResult};
pub use manager::ConfigManager;
pub use validation::{ConfigSection, ValidationError};

pub use app_config::{AppConfig, LogLevel};
pub use catalog_config::{CatalogConfig, MAX_PAGE_SIZE};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Current config file format version
pub const CONFIG_VERSION: u32 = 1;

/// Environment variable overriding `catalog.path`
pub const ENV_CATALOG_PATH: &str = "BOOKSHELF_CATALOG_PATH";

/// Environment variable overriding `catalog.page_size`
pub const ENV_PAGE_SIZE: &str = "BOOKSHELF_PAGE_SIZE";

/// Environment variable overriding `app.log_level`
pub const ENV_LOG_LEVEL: &str = "BOOKSHELF_LOG_LEVEL";

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Config file format version
    pub version: u32,

    /// Application-level settings
    pub app: AppConfig,

    /// Catalog file and listing settings
    pub catalog: CatalogConfig,
}

impl Config {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the entire configuration
    ///
    /// Returns all validation errors found across all sections.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(mut e) = self.app.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.catalog.validate() {
            errors.append(&mut e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Merges this config with another, preferring values from `other`
    pub fn merge(&mut self, other: Config) {
        self.app.merge(other.app);
        self.catalog.merge(other.catalog);
    }

    /// Applies `BOOKSHELF_*` overrides read through `lookup`
    ///
    /// Values that do not parse are ignored with a warning. Pass
    /// `|key| std::env::var(key).ok()` to read the process environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_CATALOG_PATH) {
            self.catalog.path = PathBuf::from(path);
        }

        if let Some(size) = lookup(ENV_PAGE_SIZE) {
            match size.trim().parse::<usize>() {
                Ok(size) => self.catalog.page_size = size,
                Err(_) => log::warn!("Ignoring {}={:?}: not a number", ENV_PAGE_SIZE, size),
            }
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            match level.parse::<LogLevel>() {
                Ok(level) => self.app.log_level = level,
                Err(e) => log::warn!("Ignoring {}: {}", ENV_LOG_LEVEL, e),
            }
        }

        if let Err(errors) = self.validate() {
            log::warn!(
                "Config validation warnings after env overrides: {:?}",
                errors
            );
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            app: AppConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.version, CONFIG_VERSION);
    }

    #[test]
    fn test_config_merge() {
        let mut base = Config::default();
        let mut override_config = Config::default();
        override_config.catalog.page_size = 20;

        base.merge(override_config);
        assert_eq!(base.catalog.page_size, 20);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_env_overrides(lookup_from(&[
            (ENV_CATALOG_PATH, "/data/books.json"),
            (ENV_PAGE_SIZE, "25"),
            (ENV_LOG_LEVEL, "debug"),
        ]));

        assert_eq!(config.catalog.path, PathBuf::from("/data/books.json"));
        assert_eq!(config.catalog.page_size, 25);
        assert_eq!(config.app.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_env_overrides_ignore_garbage() {
        let mut config = Config::default();
        config.apply_env_overrides(lookup_from(&[
            (ENV_PAGE_SIZE, "lots"),
            (ENV_LOG_LEVEL, "shouty"),
        ]));

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_no_env_leaves_defaults() {
        let mut config = Config::default();
        config.apply_env_overrides(|_| None);
        assert_eq!(config, Config::default());
    }
}
