use claims::*;
use std::fs;

use book::model::{UniBook, UserPrefs};
use book::storage::{BookStorage, JsonBookStorage, JsonPrefsStorage, PrefsStorage, StorageManager};
use unibook::bootstrap;
use unibook::config::{self, AppConfig};

// Helper modules for integration tests
mod helpers {
    use super::*;
    use tempfile::TempDir;

    pub fn temp_dir() -> TempDir {
        TempDir::new().expect("temp dir is creatable")
    }

    pub fn storage_in(dir: &TempDir) -> StorageManager {
        StorageManager::new(
            JsonBookStorage::new(dir.path().join("data").join("unibook.json")),
            JsonPrefsStorage::new(dir.path().join("preferences.json")),
        )
    }
}

use helpers::*;

#[test]
fn missing_prefs_file_yields_defaults_and_creates_the_file() {
    let dir = temp_dir();
    let storage = JsonPrefsStorage::new(dir.path().join("preferences.json"));

    let prefs = bootstrap::init_prefs(&storage);

    assert_eq!(prefs, UserPrefs::default());
    // The resolved prefs are saved back, so the next run finds a file.
    assert!(storage.prefs_file_path().exists());
    assert_eq!(assert_some!(assert_ok!(storage.read_prefs())), prefs);
}

#[test]
fn malformed_prefs_file_yields_defaults_and_is_repaired() {
    let dir = temp_dir();
    let storage = JsonPrefsStorage::new(dir.path().join("preferences.json"));
    fs::write(storage.prefs_file_path(), "{ not json").expect("seed file");

    let prefs = bootstrap::init_prefs(&storage);

    assert_eq!(prefs, UserPrefs::default());
    assert_eq!(assert_some!(assert_ok!(storage.read_prefs())), prefs);
}

#[test]
fn unreadable_prefs_file_yields_defaults_without_panicking() {
    let dir = temp_dir();
    // A directory at the prefs path makes every read and write fail with
    // an I/O error rather than a format error.
    let prefs_path = dir.path().join("preferences.json");
    fs::create_dir(&prefs_path).expect("seed directory");
    let storage = JsonPrefsStorage::new(&prefs_path);

    let prefs = bootstrap::init_prefs(&storage);

    assert_eq!(prefs, UserPrefs::default());
}

#[test]
fn missing_book_file_starts_with_sample_data() {
    let dir = temp_dir();
    let storage = storage_in(&dir);

    let initial = bootstrap::init_book(&storage);

    assert!(!initial.persons().is_empty());
    assert!(!initial.modules().is_empty());
}

#[test]
fn malformed_book_file_starts_empty() {
    let dir = temp_dir();
    let storage = storage_in(&dir);
    fs::create_dir_all(dir.path().join("data")).expect("data dir");
    fs::write(storage.book_file_path(), "not json at all").expect("seed file");

    let initial = bootstrap::init_book(&storage);

    assert_eq!(initial, UniBook::new());
}

#[test]
fn book_file_with_invalid_values_starts_empty() {
    let dir = temp_dir();
    let storage = storage_in(&dir);
    fs::create_dir_all(dir.path().join("data")).expect("data dir");
    // Well-formed JSON, but the phone fails its validity predicate.
    let raw = r#"{"modules":[],"persons":[{"role":"student","name":"Alex Yeoh","phone":"1","email":"alex@example.com"}]}"#;
    fs::write(storage.book_file_path(), raw).expect("seed file");

    let initial = bootstrap::init_book(&storage);

    assert_eq!(initial, UniBook::new());
}

#[test]
fn existing_book_file_is_loaded_as_is() {
    let dir = temp_dir();
    let storage = storage_in(&dir);
    let book = book::model::sample::sample_book();
    assert_ok!(storage.save_book(&book));

    let initial = bootstrap::init_book(&storage);

    assert_eq!(initial, book);
}

#[test]
fn missing_config_yields_defaults_and_writes_the_file_back() {
    let dir = temp_dir();
    let path = dir.path().join("config.toml");

    let resolved = bootstrap::init_config(Some(path.as_path()));

    assert_eq!(resolved, AppConfig::default());
    assert!(path.exists());
    assert_eq!(
        assert_some!(assert_ok!(config::read_config(&path))),
        resolved
    );
}

#[test]
fn malformed_config_yields_defaults_and_is_repaired() {
    let dir = temp_dir();
    let path = dir.path().join("config.toml");
    fs::write(&path, "logging = \"not a table\"").expect("seed file");

    let resolved = bootstrap::init_config(Some(path.as_path()));

    assert_eq!(resolved, AppConfig::default());
    assert_eq!(
        assert_some!(assert_ok!(config::read_config(&path))),
        resolved
    );
}
