//! Persons stored in the book: professors and students.

mod email;
mod name;
mod office;
mod phone;

pub use email::Email;
pub use name::Name;
pub use office::Office;
pub use phone::Phone;

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::module::ModuleCode;
use crate::model::tag::Tag;

/// A professor contact. Professors carry an office on top of the shared
/// person fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professor {
    name: Name,
    phone: Phone,
    email: Email,
    office: Office,
    #[serde(default)]
    tags: BTreeSet<Tag>,
    #[serde(default)]
    modules: BTreeSet<ModuleCode>,
}

impl Professor {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        office: Office,
        tags: BTreeSet<Tag>,
        modules: BTreeSet<ModuleCode>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            office,
            tags,
            modules,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn office(&self) -> &Office {
        &self.office
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn modules(&self) -> &BTreeSet<ModuleCode> {
        &self.modules
    }
}

/// A student contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    name: Name,
    phone: Phone,
    email: Email,
    #[serde(default)]
    tags: BTreeSet<Tag>,
    #[serde(default)]
    modules: BTreeSet<ModuleCode>,
}

impl Student {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        tags: BTreeSet<Tag>,
        modules: BTreeSet<ModuleCode>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            tags,
            modules,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn modules(&self) -> &BTreeSet<ModuleCode> {
        &self.modules
    }
}

/// Either kind of contact, with accessors over the shared fields.
///
/// Serializes with a `role` discriminator so the persisted form names the
/// kind explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Person {
    Professor(Professor),
    Student(Student),
}

impl Person {
    pub fn name(&self) -> &Name {
        match self {
            Person::Professor(professor) => professor.name(),
            Person::Student(student) => student.name(),
        }
    }

    pub fn phone(&self) -> &Phone {
        match self {
            Person::Professor(professor) => professor.phone(),
            Person::Student(student) => student.phone(),
        }
    }

    pub fn email(&self) -> &Email {
        match self {
            Person::Professor(professor) => professor.email(),
            Person::Student(student) => student.email(),
        }
    }

    /// The office, for persons that have one.
    pub fn office(&self) -> Option<&Office> {
        match self {
            Person::Professor(professor) => Some(professor.office()),
            Person::Student(_) => None,
        }
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        match self {
            Person::Professor(professor) => professor.tags(),
            Person::Student(student) => student.tags(),
        }
    }

    pub fn modules(&self) -> &BTreeSet<ModuleCode> {
        match self {
            Person::Professor(professor) => professor.modules(),
            Person::Student(student) => student.modules(),
        }
    }

    pub fn role_label(&self) -> &'static str {
        match self {
            Person::Professor(_) => "Professor",
            Person::Student(_) => "Student",
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}); Phone: {}; Email: {}",
            self.name(),
            self.role_label(),
            self.phone(),
            self.email()
        )?;
        if let Some(office) = self.office() {
            write!(f, "; Office: {office}")?;
        }
        if !self.tags().is_empty() {
            let tags: Vec<&str> = self.tags().iter().map(Tag::as_str).collect();
            write!(f, "; Tags: {}", tags.join(", "))?;
        }
        if !self.modules().is_empty() {
            let codes: Vec<&str> = self.modules().iter().map(ModuleCode::as_str).collect();
            write!(f, "; Modules: {}", codes.join(", "))?;
        }
        Ok(())
    }
}
