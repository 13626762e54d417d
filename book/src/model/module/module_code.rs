use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::InvalidValue;

static VALIDATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2,4}[0-9]{4}[A-Z]?$").expect("code pattern is well-formed"));

/// A module's code, e.g. `CS2103`. The unique key of a module within a book.
///
/// Codes are stored upper-cased; the parsing layer upper-cases raw input
/// before construction, so lookups never depend on the case the user typed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleCode(String);

impl ModuleCode {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Module codes should start with 2-4 capital letters, followed by 4 digits and an optional capital letter suffix";

    pub fn is_valid(value: &str) -> bool {
        VALIDATION_REGEX.is_match(value)
    }

    pub fn new(value: impl Into<String>) -> Result<Self, InvalidValue> {
        let value = value.into();
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidValue(Self::MESSAGE_CONSTRAINTS))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ModuleCode {
    type Error = InvalidValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModuleCode> for String {
    fn from(value: ModuleCode) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    #[test]
    fn accepts_standard_codes() {
        assert_ok!(ModuleCode::new("CS2103"));
        assert_ok!(ModuleCode::new("CS2103T"));
        assert_ok!(ModuleCode::new("GESS1025"));
        assert_ok!(ModuleCode::new("IS1103"));
    }

    #[test]
    fn rejects_lower_case_and_malformed_codes() {
        assert_err!(ModuleCode::new("cs2103")); // callers upper-case first
        assert_err!(ModuleCode::new("C2103"));
        assert_err!(ModuleCode::new("CS210"));
        assert_err!(ModuleCode::new("CS2103TT"));
        assert_err!(ModuleCode::new(""));
    }
}
