use book::model::InvalidValue;

/// Failure to interpret raw user input.
///
/// The one error kind the parsing layer produces. Carries the fixed,
/// field-specific constraint message; callers surface it verbatim in the
/// result display and re-prompt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<InvalidValue> for ParseError {
    fn from(err: InvalidValue) -> Self {
        Self::new(err.0)
    }
}
