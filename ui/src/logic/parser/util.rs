//! Parsing functions shared by the individual command parsers.
//!
//! Every function takes raw, untrusted text, trims it, runs the value
//! type's own validity predicate and wraps the result. All format
//! knowledge lives in the value types; this module only decides which
//! constraint message a rejection carries.

use std::collections::BTreeSet;

use book::index::Index;
use book::model::{Email, Module, ModuleCode, ModuleName, Name, Office, Phone, Tag};

use super::error::ParseError;

pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

/// Parses a one-based index. Leading and trailing whitespace is trimmed.
pub fn parse_index(one_based: &str) -> Result<Index, ParseError> {
    let trimmed = one_based.trim();
    // `usize::from_str` accepts a leading '+', which is not an unsigned
    // integer in the command language.
    if trimmed.starts_with('+') {
        return Err(ParseError::new(MESSAGE_INVALID_INDEX));
    }
    let value: usize = trimmed
        .parse()
        .map_err(|_| ParseError::new(MESSAGE_INVALID_INDEX))?;
    Index::from_one_based(value).ok_or_else(|| ParseError::new(MESSAGE_INVALID_INDEX))
}

/// Parses a person's name. Leading and trailing whitespace is trimmed.
pub fn parse_name(name: &str) -> Result<Name, ParseError> {
    Ok(Name::new(name.trim())?)
}

/// Parses a phone number. Leading and trailing whitespace is trimmed.
pub fn parse_phone(phone: &str) -> Result<Phone, ParseError> {
    Ok(Phone::new(phone.trim())?)
}

/// Parses an email address. Leading and trailing whitespace is trimmed.
pub fn parse_email(email: &str) -> Result<Email, ParseError> {
    Ok(Email::new(email.trim())?)
}

/// Parses an office location. Leading and trailing whitespace is trimmed.
pub fn parse_office(office: &str) -> Result<Office, ParseError> {
    Ok(Office::new(office.trim())?)
}

/// Parses a module title. Leading and trailing whitespace is trimmed.
pub fn parse_module_name(module_name: &str) -> Result<ModuleName, ParseError> {
    Ok(ModuleName::new(module_name.trim())?)
}

/// Parses a module code. Trimmed and upper-cased before validation, so
/// `" cs2103 "` and `"CS2103"` produce equal codes.
pub fn parse_module_code(module_code: &str) -> Result<ModuleCode, ParseError> {
    Ok(ModuleCode::new(module_code.trim().to_uppercase())?)
}

/// Parses a tag. Leading and trailing whitespace is trimmed.
pub fn parse_tag(tag: &str) -> Result<Tag, ParseError> {
    Ok(Tag::new(tag.trim())?)
}

/// Parses a collection of raw tags into a de-duplicated set.
///
/// Fails on the first invalid element; an empty input yields an empty set.
pub fn parse_tags<I>(tags: I) -> Result<BTreeSet<Tag>, ParseError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    tags.into_iter()
        .map(|tag| parse_tag(tag.as_ref()))
        .collect()
}

/// Parses a collection of raw module codes into a de-duplicated set, each
/// element trimmed and upper-cased.
///
/// Fails on the first invalid element; an empty input yields an empty set.
pub fn parse_module_codes<I>(module_codes: I) -> Result<BTreeSet<ModuleCode>, ParseError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    module_codes
        .into_iter()
        .map(|code| parse_module_code(code.as_ref()))
        .collect()
}

/// Parses a new module from its title and code, given as separate named
/// arguments. The module starts with empty member lists.
pub fn parse_new_module(name: &str, code: &str) -> Result<Module, ParseError> {
    Ok(Module::new(parse_module_name(name)?, parse_module_code(code)?))
}

/// Parses a person role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Professor,
    Student,
}

pub const MESSAGE_ROLE_CONSTRAINTS: &str = "Role should be either professor or student";

pub fn parse_role(role: &str) -> Result<Role, ParseError> {
    match role.trim().to_lowercase().as_str() {
        "professor" => Ok(Role::Professor),
        "student" => Ok(Role::Student),
        _ => Err(ParseError::new(MESSAGE_ROLE_CONSTRAINTS)),
    }
}
