//! Parsers turning raw command lines into [`Command`] values.
//!
//! The first word selects the command; the rest is tokenized into
//! prefixed arguments and run through the parsing functions in [`util`].

pub mod error;
pub mod tokenizer;
pub mod util;

pub use error::ParseError;

use std::collections::BTreeSet;

use book::model::{Person, Professor, Student};

use crate::logic::commands::Command;
use tokenizer::{
    ArgumentMap, PREFIX_CODE, PREFIX_EMAIL, PREFIX_MODULE, PREFIX_NAME, PREFIX_OFFICE,
    PREFIX_PHONE, PREFIX_ROLE, PREFIX_TAG, Prefix, tokenize,
};
use util::Role;

pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format!";
pub const MESSAGE_STUDENT_OFFICE: &str = "Students do not take an office";

pub const ADD_USAGE: &str = "add: Adds a person to the book.\n\
     Parameters: r/ROLE n/NAME p/PHONE e/EMAIL [o/OFFICE] [t/TAG]... [m/MODULE_CODE]...\n\
     professors take an office, students do not\n\
     Example: add r/student n/Alex Yeoh p/87438807 e/alex@example.com t/friend m/CS2103";
pub const ADD_MODULE_USAGE: &str = "addmodule: Adds a module to the book.\n\
     Parameters: n/MODULE_NAME c/MODULE_CODE\n\
     Example: addmodule n/Software Engineering c/CS2103";
pub const DELETE_USAGE: &str = "delete: Deletes the person at INDEX of the displayed list.\n\
     Parameters: INDEX (a positive integer)\n\
     Example: delete 1";
pub const FIND_USAGE: &str = "find: Lists persons whose names contain any of the keywords.\n\
     Parameters: KEYWORD [MORE_KEYWORDS]...\n\
     Example: find alex bernice";

/// Parses a full command line.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    let (word, arguments) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    match word {
        "add" => parse_add(arguments),
        "addmodule" => parse_add_module(arguments),
        "delete" => parse_delete(arguments),
        "find" => parse_find(arguments),
        "list" => Ok(Command::ListPersons),
        "modules" => Ok(Command::ListModules),
        "help" => Ok(Command::Help),
        "exit" => Ok(Command::Exit),
        _ => Err(ParseError::new(MESSAGE_UNKNOWN_COMMAND)),
    }
}

fn invalid_format(usage: &str) -> ParseError {
    ParseError::new(format!("{MESSAGE_INVALID_COMMAND_FORMAT}\n{usage}"))
}

/// The value of a mandatory prefix, or the command's usage error.
fn require<'a>(map: &'a ArgumentMap, prefix: Prefix, usage: &str) -> Result<&'a str, ParseError> {
    map.value_of(prefix).ok_or_else(|| invalid_format(usage))
}

fn parse_add(arguments: &str) -> Result<Command, ParseError> {
    let map = tokenize(
        arguments,
        &[
            PREFIX_ROLE,
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_OFFICE,
            PREFIX_TAG,
            PREFIX_MODULE,
        ],
    );
    if !map.preamble().is_empty() {
        return Err(invalid_format(ADD_USAGE));
    }

    let role = util::parse_role(require(&map, PREFIX_ROLE, ADD_USAGE)?)?;
    let name = util::parse_name(require(&map, PREFIX_NAME, ADD_USAGE)?)?;
    let phone = util::parse_phone(require(&map, PREFIX_PHONE, ADD_USAGE)?)?;
    let email = util::parse_email(require(&map, PREFIX_EMAIL, ADD_USAGE)?)?;
    let tags = util::parse_tags(map.all_values_of(PREFIX_TAG))?;
    let modules = util::parse_module_codes(map.all_values_of(PREFIX_MODULE))?;

    let person = match role {
        Role::Professor => {
            let office = util::parse_office(require(&map, PREFIX_OFFICE, ADD_USAGE)?)?;
            Person::Professor(Professor::new(name, phone, email, office, tags, modules))
        }
        Role::Student => {
            if map.has(PREFIX_OFFICE) {
                return Err(ParseError::new(MESSAGE_STUDENT_OFFICE));
            }
            Person::Student(Student::new(name, phone, email, tags, modules))
        }
    };
    Ok(Command::AddPerson(person))
}

fn parse_add_module(arguments: &str) -> Result<Command, ParseError> {
    let map = tokenize(arguments, &[PREFIX_NAME, PREFIX_CODE]);
    if !map.preamble().is_empty() {
        return Err(invalid_format(ADD_MODULE_USAGE));
    }
    let name = require(&map, PREFIX_NAME, ADD_MODULE_USAGE)?;
    let code = require(&map, PREFIX_CODE, ADD_MODULE_USAGE)?;
    Ok(Command::AddModule(util::parse_new_module(name, code)?))
}

fn parse_delete(arguments: &str) -> Result<Command, ParseError> {
    if arguments.trim().is_empty() {
        return Err(invalid_format(DELETE_USAGE));
    }
    Ok(Command::DeletePerson(util::parse_index(arguments)?))
}

fn parse_find(arguments: &str) -> Result<Command, ParseError> {
    let keywords: Vec<String> = arguments
        .split_whitespace()
        .map(str::to_string)
        .collect();
    if keywords.is_empty() {
        return Err(invalid_format(FIND_USAGE));
    }
    Ok(Command::Find(keywords))
}

#[cfg(test)]
mod tests {
    use super::*;
    use book::model::{ModuleCode, Tag};
    use claims::{assert_err, assert_matches};
    use super::util::MESSAGE_INVALID_INDEX;

    #[test]
    fn unknown_words_are_unknown_commands() {
        let err = parse_command("frobnicate").expect_err("unknown command");
        assert_eq!(err.message(), MESSAGE_UNKNOWN_COMMAND);

        let err = parse_command("").expect_err("empty input");
        assert_eq!(err.message(), MESSAGE_UNKNOWN_COMMAND);
    }

    #[test]
    fn bare_commands_parse() {
        assert_eq!(parse_command("list").expect("valid"), Command::ListPersons);
        assert_eq!(parse_command(" modules ").expect("valid"), Command::ListModules);
        assert_eq!(parse_command("help").expect("valid"), Command::Help);
        assert_eq!(parse_command("exit").expect("valid"), Command::Exit);
    }

    #[test]
    fn add_student_with_tags_and_modules() {
        let command = parse_command(
            "add r/student n/Alex Yeoh p/87438807 e/alex@example.com t/friend t/friend m/cs2103",
        )
        .expect("valid add");
        let Command::AddPerson(person) = command else {
            panic!("expected an add command");
        };
        assert_eq!(person.name().as_str(), "Alex Yeoh");
        assert_eq!(person.role_label(), "Student");
        assert_eq!(person.tags().len(), 1, "duplicate tags collapse");
        assert!(
            person
                .modules()
                .contains(&ModuleCode::new("CS2103").expect("valid"))
        );
    }

    #[test]
    fn add_professor_requires_an_office() {
        let command = parse_command(
            "add r/professor n/Damith p/98765432 e/damith@nus.edu.sg o/COM2 02-57",
        )
        .expect("valid add");
        let Command::AddPerson(person) = command else {
            panic!("expected an add command");
        };
        assert_eq!(person.office().map(|office| office.as_str()), Some("COM2 02-57"));

        let err = parse_command("add r/professor n/Damith p/98765432 e/damith@nus.edu.sg")
            .expect_err("office is mandatory for professors");
        assert!(err.message().starts_with(MESSAGE_INVALID_COMMAND_FORMAT));
    }

    #[test]
    fn add_student_rejects_an_office() {
        let err = parse_command(
            "add r/student n/Alex Yeoh p/87438807 e/alex@example.com o/COM1-1",
        )
        .expect_err("students have no office");
        assert_eq!(err.message(), MESSAGE_STUDENT_OFFICE);
    }

    #[test]
    fn add_propagates_field_constraint_messages() {
        let err = parse_command("add r/student n/Alex p/12 e/alex@example.com")
            .expect_err("phone too short");
        assert_eq!(err.message(), book::model::Phone::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn add_with_preamble_is_a_format_error() {
        let err = parse_command("add oops r/student n/Alex p/87438807 e/alex@example.com")
            .expect_err("preamble not allowed");
        assert!(err.message().starts_with(MESSAGE_INVALID_COMMAND_FORMAT));
    }

    #[test]
    fn addmodule_takes_name_and_code_as_named_arguments() {
        let command =
            parse_command("addmodule n/Software Engineering c/cs2103").expect("valid addmodule");
        let Command::AddModule(module) = command else {
            panic!("expected an addmodule command");
        };
        assert_eq!(module.to_string(), "CS2103 Software Engineering");

        // Order of the named arguments does not matter.
        let command =
            parse_command("addmodule c/cs2103 n/Software Engineering").expect("valid addmodule");
        assert_matches!(command, Command::AddModule(_));

        assert_err!(parse_command("addmodule n/Software Engineering"));
        assert_err!(parse_command("addmodule CS2103"));
    }

    #[test]
    fn delete_parses_a_one_based_index() {
        let command = parse_command("delete 3").expect("valid delete");
        let Command::DeletePerson(index) = command else {
            panic!("expected a delete command");
        };
        assert_eq!(index.one_based(), 3);

        let err = parse_command("delete 0").expect_err("zero index");
        assert_eq!(err.message(), MESSAGE_INVALID_INDEX);

        let err = parse_command("delete").expect_err("missing index");
        assert!(err.message().starts_with(MESSAGE_INVALID_COMMAND_FORMAT));
    }

    #[test]
    fn find_splits_keywords_on_whitespace() {
        let command = parse_command("find alex  bernice").expect("valid find");
        assert_eq!(
            command,
            Command::Find(vec!["alex".to_string(), "bernice".to_string()])
        );

        assert_err!(parse_command("find"));
    }

    #[test]
    fn tag_errors_use_the_tag_constraint_message() {
        let err = parse_command(
            "add r/student n/Alex p/87438807 e/alex@example.com t/not a tag",
        )
        .expect_err("invalid tag");
        assert_eq!(err.message(), Tag::MESSAGE_CONSTRAINTS);
    }
}
