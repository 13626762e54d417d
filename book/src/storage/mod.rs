//! JSON persistence for the book and the user preferences.
//!
//! Readers distinguish "nothing there yet" (`Ok(None)`) from environment
//! failures so the bootstrap layer can pick the right fallback: sample data
//! for a missing book file, an empty book for a broken one.

mod json_book;
mod json_prefs;

pub use json_book::JsonBookStorage;
pub use json_prefs::JsonPrefsStorage;

use std::path::Path;

use crate::model::{UniBook, UserPrefs};

/// Failure while reading or writing a persisted file.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Problem while reading from or writing to the file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Data file not in the correct format: {0}")]
    DataConversion(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::DataConversion(err.to_string())
    }
}

/// Access to the persisted contact book.
pub trait BookStorage {
    fn book_file_path(&self) -> &Path;

    /// Reads the book, `Ok(None)` when no file exists yet.
    fn read_book(&self) -> Result<Option<UniBook>, StorageError>;

    fn save_book(&self, book: &UniBook) -> Result<(), StorageError>;
}

/// Access to the persisted user preferences.
pub trait PrefsStorage {
    fn prefs_file_path(&self) -> &Path;

    /// Reads the preferences, `Ok(None)` when no file exists yet.
    fn read_prefs(&self) -> Result<Option<UserPrefs>, StorageError>;

    fn save_prefs(&self, prefs: &UserPrefs) -> Result<(), StorageError>;
}

/// Bundles the individual storages behind one handle, the form the rest of
/// the application works with.
#[derive(Debug)]
pub struct StorageManager {
    book: JsonBookStorage,
    prefs: JsonPrefsStorage,
}

impl StorageManager {
    pub fn new(book: JsonBookStorage, prefs: JsonPrefsStorage) -> Self {
        Self { book, prefs }
    }
}

impl BookStorage for StorageManager {
    fn book_file_path(&self) -> &Path {
        self.book.book_file_path()
    }

    fn read_book(&self) -> Result<Option<UniBook>, StorageError> {
        self.book.read_book()
    }

    fn save_book(&self, book: &UniBook) -> Result<(), StorageError> {
        self.book.save_book(book)
    }
}

impl PrefsStorage for StorageManager {
    fn prefs_file_path(&self) -> &Path {
        self.prefs.prefs_file_path()
    }

    fn read_prefs(&self) -> Result<Option<UserPrefs>, StorageError> {
        self.prefs.read_prefs()
    }

    fn save_prefs(&self, prefs: &UserPrefs) -> Result<(), StorageError> {
        self.prefs.save_prefs(prefs)
    }
}
