//! Command execution against the model, with persistence after mutations.

pub mod commands;
pub mod parser;

use book::model::ModelManager;
use book::model::UserPrefs;
use book::storage::{BookStorage, PrefsStorage, StorageError, StorageManager};

use commands::{Command, CommandError, CommandResult, DisplayView};
use parser::ParseError;

pub const HELP_MESSAGE: &str = "Available commands:\n\
     add r/ROLE n/NAME p/PHONE e/EMAIL [o/OFFICE] [t/TAG]... [m/MODULE_CODE]...\n\
     addmodule n/MODULE_NAME c/MODULE_CODE\n\
     delete INDEX\n\
     find KEYWORD [MORE_KEYWORDS]...\n\
     list         show all persons\n\
     modules      show all modules\n\
     help         show this message\n\
     exit         quit UniBook";

/// Failure to execute a command line, either while parsing it or while
/// applying it.
#[derive(Debug, thiserror::Error)]
pub enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Parses and executes command lines; the seam between the UI and the
/// model.
#[derive(Debug)]
pub struct Logic {
    model: ModelManager,
    storage: StorageManager,
}

impl Logic {
    pub fn new(model: ModelManager, storage: StorageManager) -> Self {
        Self { model, storage }
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }

    pub fn user_prefs(&self) -> &UserPrefs {
        self.model.user_prefs()
    }

    /// Executes one command line and returns its feedback.
    pub fn execute(&mut self, input: &str) -> Result<CommandResult, LogicError> {
        log::info!("----------------[USER COMMAND][{input}]");
        let command = parser::parse_command(input)?;
        Ok(self.apply(command)?)
    }

    fn apply(&mut self, command: Command) -> Result<CommandResult, CommandError> {
        match command {
            Command::AddPerson(person) => {
                let summary = person.to_string();
                self.model.add_person(person)?;
                self.save_book()?;
                Ok(CommandResult::new(format!("New person added: {summary}")))
            }
            Command::AddModule(module) => {
                let summary = module.to_string();
                self.model.add_module(module)?;
                self.save_book()?;
                Ok(CommandResult::new(format!("New module added: {summary}"))
                    .with_view(DisplayView::Modules))
            }
            Command::DeletePerson(index) => {
                let person = self
                    .model
                    .delete_displayed_person(index)
                    .ok_or(CommandError::InvalidPersonIndex)?;
                self.save_book()?;
                Ok(CommandResult::new(format!("Deleted person: {person}")))
            }
            Command::Find(keywords) => {
                self.model.set_name_filter(keywords);
                let count = self.model.displayed_persons().len();
                Ok(CommandResult::new(format!("{count} persons listed!")))
            }
            Command::ListPersons => {
                self.model.clear_name_filter();
                Ok(CommandResult::new("Listed all persons"))
            }
            Command::ListModules => {
                Ok(CommandResult::new("Listed all modules").with_view(DisplayView::Modules))
            }
            Command::Help => Ok(CommandResult::new(HELP_MESSAGE)),
            Command::Exit => Ok(CommandResult::new("Exiting UniBook ...").exiting()),
        }
    }

    fn save_book(&self) -> Result<(), StorageError> {
        self.storage.save_book(self.model.book())
    }

    /// Persists the user preferences; used by the shutdown path.
    pub fn save_prefs(&self) -> Result<(), StorageError> {
        self.storage.save_prefs(self.model.user_prefs())
    }
}
