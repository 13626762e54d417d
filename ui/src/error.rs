use std::fmt::Display;

/// Application-wide error types for the UniBook terminal user interface.
///
/// Covers UI-infrastructure failures: component lifecycle, configuration
/// handling and application state. User-input problems are not represented
/// here; they travel as [`crate::logic::LogicError`] and end up in the
/// result display instead.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// UI component lifecycle and rendering errors.
    Component(String),

    /// Configuration loading and validation errors.
    Config(String),

    /// Application state management issues.
    State(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Component(msg) => write!(f, "Component Error: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::State(msg) => write!(f, "State Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
