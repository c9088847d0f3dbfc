//! Loading and saving the config file

use crate::error::join_errors;
use crate::{Config, ConfigError, ConfigResult};
use bookshelf_core::file;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Reads and writes one config file
///
/// A missing file means "all defaults"; nothing is written until
/// [`initialize`](Self::initialize) or [`save`](Self::save) is called.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Targets `config.toml` in the platform config directory
    ///
    /// - Linux: `~/.config/bookshelf/`
    /// - macOS: `~/Library/Application Support/bookshelf/`
    /// - Windows: `%APPDATA%\bookshelf\config\`
    pub fn new() -> ConfigResult<Self> {
        let dirs = ProjectDirs::from("", "", "bookshelf").ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_directory(dirs.config_dir().to_path_buf()))
    }

    pub fn with_directory(config_dir: PathBuf) -> Self {
        Self::from_file(config_dir.join(CONFIG_FILE_NAME))
    }

    /// Targets an explicit file, as given with `--config`
    pub fn from_file(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn config_path(&self) -> &Path {
        &self.path
    }

    /// Reads the config file, or defaults when there is none
    ///
    /// Out-of-range values are loaded with a warning so the caller can
    /// still override them; an empty or unparsable file is an error.
    pub fn load(&self) -> ConfigResult<Config> {
        if !self.path.exists() {
            log::debug!("No config file at {}, using defaults", self.path.display());
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| ConfigError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        if contents.trim().is_empty() {
            return Err(ConfigError::Empty {
                path: self.path.clone(),
            });
        }

        let config: Config = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: self.path.clone(),
            source: e,
        })?;

        if let Err(errors) = config.validate() {
            log::warn!(
                "Config file {} has invalid values: {}",
                self.path.display(),
                join_errors(&errors)
            );
        }

        log::debug!("Loaded config from {}", self.path.display());
        Ok(config)
    }

    /// Like [`load`](Self::load), but a broken file falls back to defaults
    pub fn load_or_default(&self) -> Config {
        self.load().unwrap_or_else(|e| {
            log::warn!("{}, using defaults", e);
            Config::default()
        })
    }

    /// Validates `config` and writes it as pretty TOML
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        config.validate().map_err(ConfigError::Invalid)?;

        let toml = toml::to_string_pretty(config)?;
        file::write_atomic(&self.path, &toml).map_err(|e| ConfigError::Write {
            path: self.path.clone(),
            source: e,
        })?;

        log::info!("Saved config to {}", self.path.display());
        Ok(())
    }

    /// Loads, edits and saves the config in one step
    ///
    /// ```rust,no_run
    /// # use bookshelf_config::ConfigManager;
    /// # let manager = ConfigManager::new().unwrap();
    /// manager.update(|config| config.catalog.page_size = 20)?;
    /// # Ok::<(), bookshelf_config::ConfigError>(())
    /// ```
    pub fn update<F>(&self, edit: F) -> ConfigResult<()>
    where
        F: FnOnce(&mut Config),
    {
        let mut config = self.load()?;
        edit(&mut config);
        self.save(&config)
    }

    /// Writes the default config if no file exists yet
    ///
    /// Returns whether a file was created.
    pub fn initialize(&self) -> ConfigResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        self.save(&Config::default())?;
        Ok(true)
    }

    /// Overwrites the file with the default config
    pub fn reset(&self) -> ConfigResult<()> {
        self.save(&Config::default())
    }

    /// Lists the problems in the config file, empty when it is valid
    pub fn validate(&self) -> ConfigResult<Vec<String>> {
        let errors = self.load()?.validate().err().unwrap_or_default();
        Ok(errors.iter().map(ToString::to_string).collect())
    }
}
