//! Application configuration, stored as a TOML file.
//!
//! The file is optional: a missing or unusable file falls back to defaults,
//! and the resolved configuration is written back so the file on disk is
//! complete after startup (see [`crate::bootstrap::init_config`]).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name used when the user does not point at a config explicitly.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Failure while reading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Problem while reading from or writing to the file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config file not in the correct format: {0}")]
    Format(String),
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_prefs_path: Option<PathBuf>,
    logging: LoggingConfig,
}

impl AppConfig {
    /// Where user preferences are persisted.
    pub fn user_prefs_path(&self) -> PathBuf {
        self.user_prefs_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("preferences.json"))
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

/// Additional logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

/// The config path used when none is given on the command line: the user's
/// config directory when the platform reports one, the working directory
/// otherwise.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("unibook").join(DEFAULT_CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Reads the config at `path`, `Ok(None)` when no file exists yet.
pub fn read_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)?;
    let config = toml::from_str(&raw).map_err(|e: toml::de::Error| ConfigError::Format(e.to_string()))?;
    Ok(Some(config))
}

/// Writes `config` to `path`, creating parent directories as needed.
pub fn save_config(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let raw = toml::to_string_pretty(config).map_err(|e| ConfigError::Format(e.to_string()))?;
    fs::write(path, raw)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_matches, assert_ok, assert_some};
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = TempDir::new().expect("temp dir");
        let loaded = assert_ok!(read_config(&dir.path().join("config.toml")));
        assert!(loaded.is_none());
    }

    #[test]
    fn config_round_trips() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("config.toml");

        let config = AppConfig::default();
        assert_ok!(save_config(&config, &path));
        let loaded = assert_some!(assert_ok!(read_config(&path)));
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_files_take_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[logging]\nlevel = \"debug\"\n").expect("write");

        let loaded = assert_some!(assert_ok!(read_config(&path)));
        assert_eq!(loaded.logging().level(), "debug");
        assert_eq!(loaded.user_prefs_path(), PathBuf::from("preferences.json"));
    }

    #[test]
    fn malformed_files_are_format_errors() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "logging = 17").expect("write");

        let err = read_config(&path).expect_err("malformed config");
        assert_matches!(err, ConfigError::Format(_));
    }
}
