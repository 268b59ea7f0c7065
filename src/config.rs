//! Application configuration.
//!
//! Settings are resolved from command-line flags (which also read environment
//! variables through clap), then the JSON config file, then built-in defaults.

use crate::consts::cli_consts::refresh;
use crate::environment::Environment;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0}")]
    InvalidUrl(String),

    #[error("Refresh interval must be at least {min} second(s), got {got}")]
    InvalidRefreshInterval { min: u64, got: u64 },
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_interval_secs: Option<u64>,
}

impl Config {
    /// Create Config with the given values.
    pub fn new(
        api_url: Option<String>,
        api_key: Option<String>,
        refresh_interval_secs: Option<u64>,
    ) -> Self {
        Config {
            api_url,
            api_key,
            refresh_interval_secs,
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the config file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// Location of the config file: `~/.llm-dashboard/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home.join(".llm-dashboard").join("config.json"))
}

/// Fully resolved settings for a dashboard session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSettings {
    pub environment: Environment,
    /// Bearer token for the proxy. `None` sends an empty token.
    pub api_key: Option<String>,
    pub refresh_interval: Duration,
}

impl DashboardSettings {
    /// Merge explicit values over the config file over defaults.
    pub fn resolve(
        api_url: Option<String>,
        api_key: Option<String>,
        refresh_secs: Option<u64>,
        file: Option<&Config>,
    ) -> Result<Self, ConfigError> {
        let api_url = api_url.or_else(|| file.and_then(|c| c.api_url.clone()));
        let api_key = api_key.or_else(|| file.and_then(|c| c.api_key.clone()));
        let refresh_secs = refresh_secs.or_else(|| file.and_then(|c| c.refresh_interval_secs));

        let environment = match api_url {
            Some(url) => url.parse::<Environment>().map_err(ConfigError::InvalidUrl)?,
            None => Environment::Local,
        };

        let refresh_interval = match refresh_secs {
            Some(secs) if secs < refresh::MIN_REFRESH_INTERVAL_SECS => {
                return Err(ConfigError::InvalidRefreshInterval {
                    min: refresh::MIN_REFRESH_INTERVAL_SECS,
                    got: secs,
                });
            }
            Some(secs) => Duration::from_secs(secs),
            None => refresh::default_refresh_interval(),
        };

        Ok(Self {
            environment,
            api_key: api_key.filter(|key| !key.is_empty()),
            refresh_interval,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn sample_config() -> Config {
        Config::new(
            Some("http://proxy:4000".to_string()),
            Some("sk-test".to_string()),
            Some(15),
        )
    }

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = sample_config();
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let result = sample_config().save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Saving a configuration should overwrite an existing file.
    fn test_save_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        sample_config().save(&path).unwrap();

        let config2 = Config::new(Some("http://other:5000".to_string()), None, None);
        config2.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config2, loaded_config);
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(result.is_err());
    }

    #[test]
    // An empty object is a valid config with every field unset.
    fn test_load_accepts_empty_object() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        assert_eq!(Config::load_from_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_clear_removes_file_and_tolerates_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        sample_config().save(&path).unwrap();

        Config::clear(&path).unwrap();
        assert!(!path.exists());
        Config::clear(&path).unwrap();
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = DashboardSettings::resolve(None, None, None, None).unwrap();
        assert_eq!(settings.environment, Environment::Local);
        assert_eq!(settings.api_key, None);
        assert_eq!(settings.refresh_interval, Duration::from_millis(30_000));
    }

    #[test]
    fn test_resolve_file_fills_missing_values() {
        let file = sample_config();
        let settings = DashboardSettings::resolve(None, None, None, Some(&file)).unwrap();
        assert_eq!(settings.environment.proxy_url(), "http://proxy:4000");
        assert_eq!(settings.api_key.as_deref(), Some("sk-test"));
        assert_eq!(settings.refresh_interval, Duration::from_secs(15));
    }

    #[test]
    fn test_resolve_explicit_values_win() {
        let file = sample_config();
        let settings = DashboardSettings::resolve(
            Some("https://override".to_string()),
            Some("sk-override".to_string()),
            Some(5),
            Some(&file),
        )
        .unwrap();
        assert_eq!(settings.environment.proxy_url(), "https://override");
        assert_eq!(settings.api_key.as_deref(), Some("sk-override"));
        assert_eq!(settings.refresh_interval, Duration::from_secs(5));
    }

    #[test]
    fn test_resolve_rejects_zero_interval() {
        let result = DashboardSettings::resolve(None, None, Some(0), None);
        assert_eq!(
            result,
            Err(ConfigError::InvalidRefreshInterval { min: 1, got: 0 })
        );
    }

    #[test]
    fn test_resolve_rejects_bad_url() {
        let result = DashboardSettings::resolve(Some("not a url".to_string()), None, None, None);
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_resolve_treats_empty_key_as_absent() {
        let settings =
            DashboardSettings::resolve(None, Some(String::new()), None, None).unwrap();
        assert_eq!(settings.api_key, None);
    }
}
