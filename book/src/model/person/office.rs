use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::InvalidValue;

static VALIDATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S.*$").expect("office pattern is well-formed"));

/// A professor's office location. Free-form, but never blank.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Office(String);

impl Office {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Offices can take any values, and it should not be blank";

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

impl fmt::Display for Office {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Office {
    type Error = InvalidValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Office> for String {
    fn from(value: Office) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    #[test]
    fn any_non_blank_value_is_an_office() {
        assert_ok!(Office::new("COM1-1"));
        assert_ok!(Office::new("S16 #03-07, Science Drive 2"));
        assert_ok!(Office::new("-"));

        assert_err!(Office::new(""));
        assert_err!(Office::new(" leading whitespace"));
    }
}
