use tui_realm_stdlib::Paragraph;
use tuirealm::props::{Alignment, BorderType, Borders, Color, TextSpan};
use tuirealm::ratatui::layout::Rect;
use tuirealm::{Component, Event, Frame, MockComponent, NoUserEvent};

use super::common::Msg;

pub const WELCOME_MESSAGE: &str = "Welcome to UniBook! Type help to see the available commands.";

/// Feedback line below the lists: command results in the default colour,
/// errors in red.
pub struct ResultDisplay {
    component: Paragraph,
}

impl ResultDisplay {
    pub fn new(feedback: &str, is_error: bool) -> Self {
        let foreground = if is_error { Color::Red } else { Color::Reset };
        let spans: Vec<TextSpan> = feedback.lines().map(TextSpan::from).collect();
        Self {
            component: Paragraph::default()
                .borders(
                    Borders::default()
                        .color(Color::DarkGray)
                        .modifiers(BorderType::Rounded),
                )
                .title(" Result ", Alignment::Left)
                .foreground(foreground)
                .text(spans),
        }
    }

    pub fn welcome() -> Self {
        Self::new(WELCOME_MESSAGE, false)
    }
}

impl MockComponent for ResultDisplay {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        self.component.view(frame, area);
    }

    fn query(&self, attr: tuirealm::Attribute) -> Option<tuirealm::AttrValue> {
        self.component.query(attr)
    }

    fn attr(&mut self, attr: tuirealm::Attribute, value: tuirealm::AttrValue) {
        self.component.attr(attr, value);
    }

    fn state(&self) -> tuirealm::State {
        self.component.state()
    }

    fn perform(&mut self, cmd: tuirealm::command::Cmd) -> tuirealm::command::CmdResult {
        self.component.perform(cmd)
    }
}

impl Component<Msg, NoUserEvent> for ResultDisplay {
    fn on(&mut self, _ev: Event<NoUserEvent>) -> Option<Msg> {
        None
    }
}
