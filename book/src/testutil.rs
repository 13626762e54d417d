//! Fluent builders producing ready-to-use fixtures for tests.
//!
//! Defaults are valid, so `ModuleBuilder::new().build()` is always usable;
//! overrides panic on invalid input to keep test setup short.

use std::collections::BTreeSet;

use crate::model::{
    Email, Module, ModuleCode, ModuleName, Name, Office, Phone, Professor, Student, Tag,
};

pub const DEFAULT_MODULE_NAME: &str = "Software Engineering";
pub const DEFAULT_MODULE_CODE: &str = "CS2103";
pub const DEFAULT_PROFESSOR_NAME: &str = "Damith";
pub const DEFAULT_STUDENT_NAME: &str = "Alex Yeoh";

/// Builds [`Professor`] fixtures.
pub struct ProfessorBuilder {
    name: Name,
    phone: Phone,
    email: Email,
    office: Office,
    tags: BTreeSet<Tag>,
    modules: BTreeSet<ModuleCode>,
}

impl ProfessorBuilder {
    pub fn new() -> Self {
        Self {
            name: Name::new(DEFAULT_PROFESSOR_NAME).expect("default name is valid"),
            phone: Phone::new("98765432").expect("default phone is valid"),
            email: Email::new("damith@nus.edu.sg").expect("default email is valid"),
            office: Office::new("COM2 02-57").expect("default office is valid"),
            tags: BTreeSet::new(),
            modules: BTreeSet::new(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Name::new(name).expect("builder name is valid");
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = Phone::new(phone).expect("builder phone is valid");
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Email::new(email).expect("builder email is valid");
        self
    }

    pub fn with_office(mut self, office: &str) -> Self {
        self.office = Office::new(office).expect("builder office is valid");
        self
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.insert(Tag::new(tag).expect("builder tag is valid"));
        self
    }

    pub fn with_module(mut self, code: &str) -> Self {
        self.modules
            .insert(ModuleCode::new(code).expect("builder module code is valid"));
        self
    }

    pub fn build(self) -> Professor {
        Professor::new(
            self.name,
            self.phone,
            self.email,
            self.office,
            self.tags,
            self.modules,
        )
    }
}

impl Default for ProfessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds [`Student`] fixtures.
pub struct StudentBuilder {
    name: Name,
    phone: Phone,
    email: Email,
    tags: BTreeSet<Tag>,
    modules: BTreeSet<ModuleCode>,
}

impl StudentBuilder {
    pub fn new() -> Self {
        Self {
            name: Name::new(DEFAULT_STUDENT_NAME).expect("default name is valid"),
            phone: Phone::new("87438807").expect("default phone is valid"),
            email: Email::new("alexyeoh@example.com").expect("default email is valid"),
            tags: BTreeSet::new(),
            modules: BTreeSet::new(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Name::new(name).expect("builder name is valid");
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = Phone::new(phone).expect("builder phone is valid");
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Email::new(email).expect("builder email is valid");
        self
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.insert(Tag::new(tag).expect("builder tag is valid"));
        self
    }

    pub fn with_module(mut self, code: &str) -> Self {
        self.modules
            .insert(ModuleCode::new(code).expect("builder module code is valid"));
        self
    }

    pub fn build(self) -> Student {
        Student::new(self.name, self.phone, self.email, self.tags, self.modules)
    }
}

impl Default for StudentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds [`Module`] fixtures. The default module carries one default
/// professor, so member-list behaviour is exercised out of the box.
pub struct ModuleBuilder {
    name: ModuleName,
    code: ModuleCode,
    professors: Vec<Professor>,
    students: Vec<Student>,
}

impl ModuleBuilder {
    pub fn new() -> Self {
        Self {
            name: ModuleName::new(DEFAULT_MODULE_NAME).expect("default module name is valid"),
            code: ModuleCode::new(DEFAULT_MODULE_CODE).expect("default module code is valid"),
            professors: vec![ProfessorBuilder::new().build()],
            students: Vec::new(),
        }
    }

    /// Starts from an existing module's data.
    pub fn from_module(module: &Module) -> Self {
        Self {
            name: module.name().clone(),
            code: module.code().clone(),
            professors: module.professors().to_vec(),
            students: module.students().to_vec(),
        }
    }

    pub fn with_module_name(mut self, name: &str) -> Self {
        self.name = ModuleName::new(name).expect("builder module name is valid");
        self
    }

    pub fn with_module_code(mut self, code: &str) -> Self {
        self.code = ModuleCode::new(code).expect("builder module code is valid");
        self
    }

    /// Replaces the professor list with a single professor of this name.
    pub fn with_professor(mut self, name: &str) -> Self {
        self.professors = vec![ProfessorBuilder::new().with_name(name).build()];
        self
    }

    pub fn with_student(mut self, name: &str) -> Self {
        self.students.push(StudentBuilder::new().with_name(name).build());
        self
    }

    pub fn build(self) -> Module {
        Module::with_members(self.name, self.code, self.professors, self.students)
    }

    /// Builds the module identity only, with empty member lists.
    pub fn build_empty(self) -> Module {
        Module::new(self.name, self.code)
    }
}

impl Default for ModuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_module_matches_the_documented_defaults() {
        let module = ModuleBuilder::new().build();
        assert_eq!(module.name().as_str(), DEFAULT_MODULE_NAME);
        assert_eq!(module.code().as_str(), DEFAULT_MODULE_CODE);
        assert_eq!(module.professors().len(), 1);
        assert_eq!(module.professors()[0].name().as_str(), DEFAULT_PROFESSOR_NAME);
        assert!(module.students().is_empty());
    }

    #[test]
    fn overrides_replace_defaults() {
        let module = ModuleBuilder::new()
            .with_module_name("Effective Communication")
            .with_module_code("CS2101")
            .with_professor("Aaron Tan")
            .build();
        assert_eq!(module.to_string(), "CS2101 Effective Communication");
        assert_eq!(module.professors()[0].name().as_str(), "Aaron Tan");
    }

    #[test]
    fn from_module_copies_all_fields() {
        let original = ModuleBuilder::new().with_student("Bernice Yu").build();
        let copy = ModuleBuilder::from_module(&original).build();
        assert_eq!(copy, original);
    }
}
