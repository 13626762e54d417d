use tuirealm::command::CmdResult;
use tuirealm::props::{Alignment, Color, Style};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::widgets::{Block, Borders, List, ListItem};
use tuirealm::{Component, Event, Frame, MockComponent, NoUserEvent};

use super::common::Msg;

/// Read-only, numbered listing of the book's modules.
pub struct ModuleList {
    rows: Vec<String>,
}

impl ModuleList {
    pub fn new(rows: Vec<String>) -> Self {
        Self { rows }
    }
}

impl MockComponent for ModuleList {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = if self.rows.is_empty() {
            vec![ListItem::new("No modules to show").style(Style::default().fg(Color::DarkGray))]
        } else {
            self.rows
                .iter()
                .enumerate()
                .map(|(i, row)| ListItem::new(format!("{}. {row}", i + 1)))
                .collect()
        };
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .title(" Modules ")
                .title_alignment(Alignment::Center),
        );
        frame.render_widget(list, area);
    }

    fn query(&self, _attr: tuirealm::Attribute) -> Option<tuirealm::AttrValue> {
        None
    }

    fn attr(&mut self, _attr: tuirealm::Attribute, _value: tuirealm::AttrValue) {}

    fn state(&self) -> tuirealm::State {
        tuirealm::State::None
    }

    fn perform(&mut self, _cmd: tuirealm::command::Cmd) -> tuirealm::command::CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for ModuleList {
    fn on(&mut self, _ev: Event<NoUserEvent>) -> Option<Msg> {
        None
    }
}
