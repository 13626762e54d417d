//! The command language: parsed commands and their outcomes.

use book::index::Index;
use book::model::{BookError, Module, Person};
use book::storage::StorageError;

/// A fully parsed user command, ready to execute against the model.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddPerson(Person),
    AddModule(Module),
    DeletePerson(Index),
    Find(Vec<String>),
    ListPersons,
    ListModules,
    Help,
    Exit,
}

/// Which list a command wants on screen afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayView {
    Persons,
    Modules,
}

/// Feedback produced by a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback: String,
    view: DisplayView,
    exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            view: DisplayView::Persons,
            exit: false,
        }
    }

    pub fn with_view(mut self, view: DisplayView) -> Self {
        self.view = view;
        self
    }

    pub fn exiting(mut self) -> Self {
        self.exit = true;
        self
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn view(&self) -> DisplayView {
        self.view
    }

    pub fn is_exit(&self) -> bool {
        self.exit
    }
}

/// Failure while executing a structurally valid command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("The person index provided is invalid")]
    InvalidPersonIndex,
    #[error(transparent)]
    Book(#[from] BookError),
    #[error("Could not save the book: {0}")]
    Save(#[from] StorageError),
}
