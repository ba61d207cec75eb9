//! Configuration manager - main API for config operations

use crate::persistence::ConfigPersistence;
use crate::{Config, ConfigError, ConfigResult};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Main configuration manager
///
/// The primary interface for loading, saving and initializing the config
/// file. It handles file paths, defaults and validation.
pub struct ConfigManager {
    persistence: ConfigPersistence,
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a config manager using the platform config directory
    ///
    /// Follows the XDG base directory convention, e.g.
    /// `~/.config/biblio/config.toml` on Linux.
    pub fn new() -> ConfigResult<Self> {
        let config_dir = Self::default_config_dir()?;
        Ok(Self::with_directory(config_dir))
    }

    /// Creates a config manager rooted at a custom config directory
    pub fn with_directory(config_dir: PathBuf) -> Self {
        Self::with_path(config_dir.join("config.toml"))
    }

    /// Creates a config manager for an explicit config file path
    pub fn with_path(config_path: PathBuf) -> Self {
        Self {
            persistence: ConfigPersistence::new(config_path.clone()),
            config_path,
        }
    }

    fn default_config_dir() -> ConfigResult<PathBuf> {
        ProjectDirs::from("", "", "biblio")
            .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
            .ok_or_else(|| ConfigError::PathResolutionError {
                reason: "Could not determine user config directory".to_string(),
            })
    }

    /// Returns the full config file path
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Loads the configuration from file
    ///
    /// A missing file yields the default configuration; a corrupted file is
    /// an error.
    pub fn load(&self) -> ConfigResult<Config> {
        self.persistence.load()
    }

    /// Loads the configuration, falling back to defaults on any error
    ///
    /// Errors are logged; the function always returns a usable config.
    pub fn load_or_default(&self) -> Config {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            }
        }
    }

    /// Saves the configuration to file
    ///
    /// Validates first and writes atomically.
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        self.persistence.save(config)
    }

    /// Updates the configuration using a closure
    ///
    /// Loads the current config, applies the update function, and saves the
    /// result atomically.
    pub fn update<F>(&self, update_fn: F) -> ConfigResult<()>
    where
        F: FnOnce(&mut Config),
    {
        let mut config = self.load()?;
        update_fn(&mut config);
        self.save(&config)
    }

    /// Generates a default config file if one doesn't exist
    ///
    /// Returns `Ok(true)` if a new file was created, `Ok(false)` if one
    /// already exists.
    pub fn initialize(&self) -> ConfigResult<bool> {
        if self.config_path.exists() {
            log::info!(
                "Config file already exists at {}",
                self.config_path.display()
            );
            return Ok(false);
        }

        self.persistence.generate_default()?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_manager() -> (TempDir, ConfigManager) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let manager = ConfigManager::with_directory(temp_dir.path().to_path_buf());
        (temp_dir, manager)
    }

    #[test]
    fn test_load_or_default_with_missing_file() {
        let (_temp_dir, manager) = setup_test_manager();
        let config = manager.load_or_default();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let (_temp_dir, manager) = setup_test_manager();

        let mut config = Config::default();
        config.circulation.loan_period_days = 7;

        manager.save(&config).expect("Should save config");
        let loaded = manager.load().expect("Should load config");

        assert_eq!(loaded.circulation.loan_period_days, 7);
    }

    #[test]
    fn test_update() {
        let (_temp_dir, manager) = setup_test_manager();

        manager.save(&Config::default()).expect("Should save");

        manager
            .update(|config| {
                config.circulation.daily_fine_rate = 2.5;
            })
            .expect("Should update");

        let loaded = manager.load().expect("Should load");
        assert_eq!(loaded.circulation.daily_fine_rate, 2.5);
    }

    #[test]
    fn test_initialize_creates_file() {
        let (_temp_dir, manager) = setup_test_manager();

        let created = manager.initialize().expect("Should initialize");
        assert!(created);
        assert!(manager.config_path().exists());
    }

    #[test]
    fn test_initialize_with_existing_file() {
        let (_temp_dir, manager) = setup_test_manager();

        manager.save(&Config::default()).expect("Should save");

        let created = manager.initialize().expect("Should initialize");
        assert!(!created);
    }

    #[test]
    fn test_config_file_path() {
        let (_temp_dir, manager) = setup_test_manager();
        assert!(manager.config_path().ends_with("config.toml"));
    }

    #[test]
    fn test_with_explicit_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("custom.toml");
        let manager = ConfigManager::with_path(path.clone());

        manager.save(&Config::default()).expect("Should save");
        assert!(path.exists());
    }
}
