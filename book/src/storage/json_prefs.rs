use std::fs;
use std::path::{Path, PathBuf};

use super::{PrefsStorage, StorageError};
use crate::model::UserPrefs;

/// User preferences as a JSON file.
#[derive(Debug)]
pub struct JsonPrefsStorage {
    path: PathBuf,
}

impl JsonPrefsStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PrefsStorage for JsonPrefsStorage {
    fn prefs_file_path(&self) -> &Path {
        &self.path
    }

    fn read_prefs(&self) -> Result<Option<UserPrefs>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let prefs = serde_json::from_str(&raw)?;
        Ok(Some(prefs))
    }

    fn save_prefs(&self, prefs: &UserPrefs) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_matches, assert_ok, assert_some};
    use tempfile::TempDir;

    #[test]
    fn prefs_round_trip() {
        let dir = TempDir::new().expect("temp dir");
        let storage = JsonPrefsStorage::new(dir.path().join("preferences.json"));

        assert!(assert_ok!(storage.read_prefs()).is_none());

        let prefs = UserPrefs::default();
        assert_ok!(storage.save_prefs(&prefs));
        let loaded = assert_some!(assert_ok!(storage.read_prefs()));
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn malformed_prefs_are_conversion_errors() {
        let dir = TempDir::new().expect("temp dir");
        let storage = JsonPrefsStorage::new(dir.path().join("preferences.json"));
        fs::write(storage.prefs_file_path(), "{ truncated").expect("write");

        let err = storage.read_prefs().expect_err("malformed file");
        assert_matches!(err, StorageError::DataConversion(_));
    }
}
