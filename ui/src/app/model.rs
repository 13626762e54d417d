use std::time::Duration;

use tuirealm::event::NoUserEvent;
use tuirealm::terminal::{CrosstermTerminalAdapter, TerminalAdapter, TerminalBridge};
use tuirealm::{Application, EventListenerCfg, Update};

use crate::components::common::{ComponentId, Msg};
use crate::components::{CommandBox, HelpBar, ModuleList, PersonList, ResultDisplay};
use crate::error::{AppError, AppResult};
use crate::logic::Logic;

/// Which list occupies the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    People,
    Modules,
}

/// Application model
pub struct Model<T>
where
    T: TerminalAdapter,
{
    /// Application
    pub app: Application<ComponentId, Msg, NoUserEvent>,
    pub app_state: AppState,
    /// Indicates that the application must quit
    pub quit: bool,
    /// Tells whether to redraw interface
    pub redraw: bool,
    /// Used to draw to terminal
    pub terminal: TerminalBridge<T>,
    /// Command execution against the book
    pub logic: Logic,
}

impl Model<CrosstermTerminalAdapter> {
    pub fn new(logic: Logic) -> AppResult<Self> {
        let mut model = Self {
            app: Self::init_app()?,
            app_state: AppState::People,
            quit: false,
            redraw: true,
            terminal: TerminalBridge::init_crossterm()
                .map_err(|e| AppError::Component(e.to_string()))?,
            logic,
        };
        // The lists are mounted empty; fill them from the loaded book.
        model.remount_person_list()?;
        model.remount_module_list()?;
        Ok(model)
    }
}

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    fn init_app() -> AppResult<Application<ComponentId, Msg, NoUserEvent>> {
        let mut app: Application<ComponentId, Msg, NoUserEvent> = Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(10), 10)
                .poll_timeout(Duration::from_millis(50))
                .tick_interval(Duration::from_millis(50)),
        );

        app.mount(
            ComponentId::PersonList,
            Box::new(PersonList::new(Vec::new())),
            Vec::default(),
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        app.mount(
            ComponentId::ModuleList,
            Box::new(ModuleList::new(Vec::new())),
            Vec::default(),
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        app.mount(
            ComponentId::ResultDisplay,
            Box::new(ResultDisplay::welcome()),
            Vec::default(),
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        app.mount(
            ComponentId::HelpBar,
            Box::new(HelpBar::new()),
            Vec::default(),
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        app.mount(
            ComponentId::CommandBox,
            Box::new(CommandBox::new()),
            Vec::default(),
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        // All keystrokes belong to the command box.
        app.active(&ComponentId::CommandBox)
            .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(app)
    }

    /// Replaces the person list with the currently displayed persons.
    pub fn remount_person_list(&mut self) -> AppResult<()> {
        let rows: Vec<String> = self
            .logic
            .model()
            .displayed_persons()
            .iter()
            .map(|person| person.to_string())
            .collect();
        self.app
            .remount(
                ComponentId::PersonList,
                Box::new(PersonList::new(rows)),
                Vec::default(),
            )
            .map_err(|e| AppError::Component(e.to_string()))
    }

    /// Replaces the module list with the book's modules.
    pub fn remount_module_list(&mut self) -> AppResult<()> {
        let rows: Vec<String> = self
            .logic
            .model()
            .book()
            .modules()
            .iter()
            .map(|module| {
                format!(
                    "{module} ({} professors, {} students)",
                    module.professors().len(),
                    module.students().len()
                )
            })
            .collect();
        self.app
            .remount(
                ComponentId::ModuleList,
                Box::new(ModuleList::new(rows)),
                Vec::default(),
            )
            .map_err(|e| AppError::Component(e.to_string()))
    }

    /// Replaces the result display's feedback text.
    pub fn set_feedback(&mut self, feedback: &str, is_error: bool) -> AppResult<()> {
        self.app
            .remount(
                ComponentId::ResultDisplay,
                Box::new(ResultDisplay::new(feedback, is_error)),
                Vec::default(),
            )
            .map_err(|e| AppError::Component(e.to_string()))
    }
}

impl<T> Update<Msg> for Model<T>
where
    T: TerminalAdapter,
{
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        self.handle_update(msg)
    }
}
