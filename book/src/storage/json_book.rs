use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{BookStorage, StorageError};
use crate::model::{Module, ModuleCode, ModuleName, Person, UniBook};

/// The contact book as a JSON file.
///
/// Each person is stored exactly once; module member lists are rebuilt
/// from the persons' module sets on load.
#[derive(Debug)]
pub struct JsonBookStorage {
    path: PathBuf,
}

impl JsonBookStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BookStorage for JsonBookStorage {
    fn book_file_path(&self) -> &Path {
        &self.path
    }

    fn read_book(&self) -> Result<Option<UniBook>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        log::debug!("Reading book from {}", self.path.display());
        let raw = fs::read_to_string(&self.path)?;
        let data: JsonUniBook = serde_json::from_str(&raw)?;
        Ok(Some(data.into_book()?))
    }

    fn save_book(&self, book: &UniBook) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = JsonUniBook::from_book(book);
        let raw = serde_json::to_string_pretty(&data)?;
        fs::write(&self.path, raw)?;
        log::debug!("Saved book to {}", self.path.display());
        Ok(())
    }
}

/// Serialized form of the book.
#[derive(Debug, Serialize, Deserialize)]
struct JsonUniBook {
    #[serde(default)]
    modules: Vec<JsonModule>,
    #[serde(default)]
    persons: Vec<Person>,
}

/// Serialized form of a module: identity only, membership is derived.
#[derive(Debug, Serialize, Deserialize)]
struct JsonModule {
    name: ModuleName,
    code: ModuleCode,
}

impl JsonUniBook {
    fn from_book(book: &UniBook) -> Self {
        Self {
            modules: book
                .modules()
                .iter()
                .map(|module| JsonModule {
                    name: module.name().clone(),
                    code: module.code().clone(),
                })
                .collect(),
            persons: book.persons().to_vec(),
        }
    }

    /// Rebuilds the domain book, re-checking every invariant: duplicate
    /// module codes, duplicate persons and dangling module references all
    /// surface as conversion errors.
    fn into_book(self) -> Result<UniBook, StorageError> {
        let mut book = UniBook::new();
        for module in self.modules {
            book.add_module(Module::new(module.name, module.code))
                .map_err(|e| StorageError::DataConversion(e.to_string()))?;
        }
        for person in self.persons {
            book.add_person(person)
                .map_err(|e| StorageError::DataConversion(e.to_string()))?;
        }
        Ok(book)
    }
}
