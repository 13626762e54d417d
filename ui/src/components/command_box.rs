use tuirealm::command::CmdResult;
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::props::{Alignment, Color, Style};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Block, Borders, Paragraph};
use tuirealm::{Component, Event, Frame, MockComponent, NoUserEvent};

use super::common::Msg;

/// The command input line.
///
/// Collects keystrokes into a buffer, submits it on Enter and keeps the
/// submitted lines as history reachable with the arrow keys.
pub struct CommandBox {
    current_input: String,
    history: Vec<String>,
    // Position inside `history` while browsing it; `None` means the user
    // is typing a fresh line.
    history_cursor: Option<usize>,
}

impl CommandBox {
    pub fn new() -> Self {
        Self {
            current_input: String::new(),
            history: Vec::new(),
            history_cursor: None,
        }
    }

    fn submit(&mut self) -> Option<Msg> {
        let line = self.current_input.trim().to_string();
        if line.is_empty() {
            return None;
        }
        self.history.push(line.clone());
        self.history_cursor = None;
        self.current_input.clear();
        Some(Msg::CommandSubmitted(line))
    }

    fn history_previous(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let next = match self.history_cursor {
            None => self.history.len() - 1,
            Some(0) => 0,
            Some(position) => position - 1,
        };
        self.history_cursor = Some(next);
        self.current_input = self.history[next].clone();
    }

    fn history_next(&mut self) {
        match self.history_cursor {
            None => {}
            Some(position) if position + 1 < self.history.len() => {
                self.history_cursor = Some(position + 1);
                self.current_input = self.history[position + 1].clone();
            }
            Some(_) => {
                self.history_cursor = None;
                self.current_input.clear();
            }
        }
    }
}

impl Default for CommandBox {
    fn default() -> Self {
        Self::new()
    }
}

impl MockComponent for CommandBox {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Yellow)),
            Span::raw(self.current_input.clone()),
            Span::styled("_", Style::default().fg(Color::DarkGray)),
        ]);
        let paragraph = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .title(" Command ")
                .title_alignment(Alignment::Left),
        );
        frame.render_widget(paragraph, area);
    }

    fn query(&self, _attr: tuirealm::Attribute) -> Option<tuirealm::AttrValue> {
        None
    }

    fn attr(&mut self, _attr: tuirealm::Attribute, _value: tuirealm::AttrValue) {}

    fn state(&self) -> tuirealm::State {
        tuirealm::State::One(tuirealm::StateValue::String(self.current_input.clone()))
    }

    fn perform(&mut self, _cmd: tuirealm::command::Cmd) -> tuirealm::command::CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for CommandBox {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            }) => Some(Msg::AppClose),
            Event::Keyboard(KeyEvent {
                code: Key::Char(ch),
                ..
            }) => {
                self.current_input.push(ch);
                Some(Msg::ForceRedraw)
            }
            Event::Keyboard(KeyEvent {
                code: Key::Backspace,
                ..
            }) => {
                self.current_input.pop();
                Some(Msg::ForceRedraw)
            }
            Event::Keyboard(KeyEvent {
                code: Key::Enter, ..
            }) => self.submit().or(Some(Msg::ForceRedraw)),
            Event::Keyboard(KeyEvent { code: Key::Up, .. }) => {
                self.history_previous();
                Some(Msg::ForceRedraw)
            }
            Event::Keyboard(KeyEvent {
                code: Key::Down, ..
            }) => {
                self.history_next();
                Some(Msg::ForceRedraw)
            }
            Event::Keyboard(KeyEvent { code: Key::Esc, .. }) => {
                self.current_input.clear();
                self.history_cursor = None;
                Some(Msg::ForceRedraw)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: Key) -> Event<NoUserEvent> {
        Event::Keyboard(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn type_line(box_: &mut CommandBox, line: &str) {
        for ch in line.chars() {
            box_.on(key(Key::Char(ch)));
        }
    }

    #[test]
    fn enter_submits_the_trimmed_line_and_clears_the_buffer() {
        let mut command_box = CommandBox::new();
        type_line(&mut command_box, " list ");

        let msg = command_box.on(key(Key::Enter));
        assert_eq!(msg, Some(Msg::CommandSubmitted("list".to_string())));
        assert!(command_box.current_input.is_empty());
    }

    #[test]
    fn empty_lines_are_not_submitted() {
        let mut command_box = CommandBox::new();
        type_line(&mut command_box, "   ");
        let msg = command_box.on(key(Key::Enter));
        assert_eq!(msg, Some(Msg::ForceRedraw));
        assert!(command_box.history.is_empty());
    }

    #[test]
    fn arrow_keys_walk_the_history_and_back_out() {
        let mut command_box = CommandBox::new();
        type_line(&mut command_box, "list");
        command_box.on(key(Key::Enter));
        type_line(&mut command_box, "modules");
        command_box.on(key(Key::Enter));

        command_box.on(key(Key::Up));
        assert_eq!(command_box.current_input, "modules");
        command_box.on(key(Key::Up));
        assert_eq!(command_box.current_input, "list");

        command_box.on(key(Key::Down));
        assert_eq!(command_box.current_input, "modules");
        command_box.on(key(Key::Down));
        assert!(command_box.current_input.is_empty());
    }

    #[test]
    fn ctrl_c_requests_shutdown() {
        let mut command_box = CommandBox::new();
        let msg = command_box.on(Event::Keyboard(KeyEvent {
            code: Key::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        }));
        assert_eq!(msg, Some(Msg::AppClose));
    }
}
