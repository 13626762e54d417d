use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::InvalidValue;

// local-part: alphanumeric runs joined by single +_.- separators.
// domain: hyphen-separated alphanumeric labels joined by periods, with the
// final label at least two characters long.
static VALIDATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[[:alnum:]]+([+_.-][[:alnum:]]+)*@([[:alnum:]]([[:alnum:]-]*[[:alnum:]])?\.)*[[:alnum:]][[:alnum:]-]*[[:alnum:]]$",
    )
    .expect("email pattern is well-formed")
});

/// A person's email address.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain and adhere to the following constraints:\n\
         1. The local-part should only contain alphanumeric characters and these special characters, excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
         2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels separated by periods, where each label starts and ends with alphanumeric characters, consists of alphanumeric characters separated only by hyphens, if any, and the final label is at least 2 characters long.";

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

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = InvalidValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}
