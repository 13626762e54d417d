use tuirealm::ratatui::layout::{Constraint, Direction, Layout};
use tuirealm::terminal::TerminalAdapter;

use super::model::{AppState, Model};
use crate::components::common::ComponentId;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    /// Draws the whole interface for the current state.
    pub fn view(&mut self) {
        let help_visible = self.logic.user_prefs().show_help_bar();
        let drawn = self.terminal.draw(|f| {
            let mut constraints = vec![
                Constraint::Min(5),    // list area
                Constraint::Length(4), // result display
                Constraint::Length(3), // command box
            ];
            if help_visible {
                constraints.push(Constraint::Length(1)); // help bar
            }
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(f.area());

            match self.app_state {
                AppState::People => self.app.view(&ComponentId::PersonList, f, chunks[0]),
                AppState::Modules => self.app.view(&ComponentId::ModuleList, f, chunks[0]),
            }
            self.app.view(&ComponentId::ResultDisplay, f, chunks[1]);
            self.app.view(&ComponentId::CommandBox, f, chunks[2]);
            if help_visible {
                self.app.view(&ComponentId::HelpBar, f, chunks[3]);
            }
        });
        if let Err(e) = drawn {
            log::error!("Failed to draw the interface: {e}");
        }
    }
}
