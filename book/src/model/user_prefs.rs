use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// User preferences persisted between runs.
///
/// Unknown fields in the file are ignored and missing fields take their
/// defaults, so preference files written by older or newer versions still
/// load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPrefs {
    book_file_path: PathBuf,
    show_help_bar: bool,
}

impl UserPrefs {
    pub fn book_file_path(&self) -> &Path {
        &self.book_file_path
    }

    pub fn show_help_bar(&self) -> bool {
        self.show_help_bar
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            book_file_path: PathBuf::from("data").join("unibook.json"),
            show_help_bar: true,
        }
    }
}
