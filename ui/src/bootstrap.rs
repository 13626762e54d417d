//! Startup fallback ladder: config, preferences, then book data.
//!
//! Every step maps environment problems to a safe default and logs at a
//! severity matching the impact; startup never aborts because a file is
//! missing, unreadable or malformed.

use std::path::{Path, PathBuf};

use book::model::sample::sample_book;
use book::model::{UniBook, UserPrefs};
use book::storage::{BookStorage, PrefsStorage, StorageError};

use crate::config::{self, AppConfig};

/// Resolves the application config.
///
/// Reads the file at `path` (or the platform default location when no path
/// is given); a missing file yields the defaults, a broken one is logged
/// and replaced by the defaults. The resolved config is always written
/// back, so a missing or partial file is completed on disk.
pub fn init_config(path: Option<&Path>) -> AppConfig {
    let path_used: PathBuf = match path {
        Some(custom) => {
            log::info!("Custom config file specified: {}", custom.display());
            custom.to_path_buf()
        }
        None => config::default_config_path(),
    };
    log::info!("Using config file: {}", path_used.display());

    let initialized = match config::read_config(&path_used) {
        Ok(Some(config)) => config,
        Ok(None) => {
            log::info!("Config file not found. Using default config properties");
            AppConfig::default()
        }
        Err(e) => {
            log::warn!(
                "Config file at {} could not be used: {e}. Using default config properties",
                path_used.display()
            );
            AppConfig::default()
        }
    };

    // Update the file in case it was missing to begin with or there are
    // new fields.
    if let Err(e) = config::save_config(&initialized, &path_used) {
        log::warn!("Failed to save config file: {e}");
    }
    initialized
}

/// Resolves the user preferences from `storage`.
///
/// Missing, malformed and unreadable files all yield the defaults; the
/// resolved preferences are written back best-effort.
pub fn init_prefs(storage: &impl PrefsStorage) -> UserPrefs {
    let path = storage.prefs_file_path();
    log::info!("Using prefs file: {}", path.display());

    let initialized = match storage.read_prefs() {
        Ok(Some(prefs)) => prefs,
        Ok(None) => {
            log::info!("Prefs file not found. Using default user prefs");
            UserPrefs::default()
        }
        Err(StorageError::DataConversion(e)) => {
            log::warn!(
                "UserPrefs file at {} is not in the correct format: {e}. Using default user prefs",
                path.display()
            );
            UserPrefs::default()
        }
        Err(StorageError::Io(e)) => {
            log::warn!("Problem while reading from the prefs file: {e}. Using default user prefs");
            UserPrefs::default()
        }
    };

    // Update the file in case it was missing to begin with or there are
    // new fields.
    if let Err(e) = storage.save_prefs(&initialized) {
        log::warn!("Failed to save prefs file: {e}");
    }
    initialized
}

/// Resolves the initial book from `storage`.
///
/// A missing data file starts the sample book; a malformed or unreadable
/// one starts an empty book.
pub fn init_book(storage: &impl BookStorage) -> UniBook {
    match storage.read_book() {
        Ok(Some(book)) => book,
        Ok(None) => {
            log::info!("Data file not found. Will be starting with a sample UniBook");
            sample_book()
        }
        Err(StorageError::DataConversion(e)) => {
            log::warn!(
                "Data file not in the correct format: {e}. Will be starting with an empty UniBook"
            );
            UniBook::new()
        }
        Err(StorageError::Io(e)) => {
            log::warn!(
                "Problem while reading from the file: {e}. Will be starting with an empty UniBook"
            );
            UniBook::new()
        }
    }
}
