use tuirealm::terminal::TerminalAdapter;

use super::model::{AppState, Model};
use crate::components::common::Msg;
use crate::logic::commands::DisplayView;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn handle_update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        if let Some(msg) = msg {
            // Set redraw
            self.redraw = true;

            match msg {
                Msg::AppClose => {
                    log::info!("Shutting down on user request");
                    self.quit = true;
                }
                Msg::ForceRedraw => {}
                Msg::CommandSubmitted(line) => self.run_command(&line),
            }
        }
        None
    }

    /// Runs one command line and reflects the outcome in the UI.
    fn run_command(&mut self, line: &str) {
        match self.logic.execute(line) {
            Ok(result) => {
                if result.is_exit() {
                    self.quit = true;
                }
                self.app_state = match result.view() {
                    DisplayView::Persons => AppState::People,
                    DisplayView::Modules => AppState::Modules,
                };
                if let Err(e) = self.set_feedback(result.feedback(), false) {
                    log::error!("Failed to update result display: {e}");
                }
            }
            Err(e) => {
                log::info!("Invalid command: {line}");
                if let Err(mount_err) = self.set_feedback(&e.to_string(), true) {
                    log::error!("Failed to update result display: {mount_err}");
                }
            }
        }

        // The book may have changed either way; refresh both lists.
        if let Err(e) = self.remount_person_list() {
            log::error!("Failed to refresh person list: {e}");
        }
        if let Err(e) = self.remount_module_list() {
            log::error!("Failed to refresh module list: {e}");
        }
    }
}
