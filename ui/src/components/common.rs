//! Identifiers and messages shared by all components.

#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub enum ComponentId {
    CommandBox,
    PersonList,
    ModuleList,
    ResultDisplay,
    HelpBar,
}

#[derive(Debug, PartialEq)]
pub enum Msg {
    AppClose,
    ForceRedraw,
    /// A command line the user finished typing.
    CommandSubmitted(String),
}
