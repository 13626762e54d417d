//! Modules and their validated identifiers.

mod module_code;
mod module_name;

pub use module_code::ModuleCode;
pub use module_name::ModuleName;

use std::fmt;

use crate::model::person::{Name, Professor, Student};

/// A university module with the contacts attached to it.
///
/// The member lists are ordered and owned by the module; the book keeps
/// them consistent with each person's own module set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    name: ModuleName,
    code: ModuleCode,
    professors: Vec<Professor>,
    students: Vec<Student>,
}

impl Module {
    /// Creates a module with no members yet.
    pub fn new(name: ModuleName, code: ModuleCode) -> Self {
        Self::with_members(name, code, Vec::new(), Vec::new())
    }

    pub fn with_members(
        name: ModuleName,
        code: ModuleCode,
        professors: Vec<Professor>,
        students: Vec<Student>,
    ) -> Self {
        Self {
            name,
            code,
            professors,
            students,
        }
    }

    pub fn name(&self) -> &ModuleName {
        &self.name
    }

    pub fn code(&self) -> &ModuleCode {
        &self.code
    }

    pub fn professors(&self) -> &[Professor] {
        &self.professors
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub(crate) fn add_professor(&mut self, professor: Professor) {
        self.professors.push(professor);
    }

    pub(crate) fn add_student(&mut self, student: Student) {
        self.students.push(student);
    }

    /// Drops every member with the given name from both lists.
    pub(crate) fn remove_member(&mut self, name: &Name) {
        self.professors.retain(|professor| professor.name() != name);
        self.students.retain(|student| student.name() != name);
    }

    pub fn member_count(&self) -> usize {
        self.professors.len() + self.students.len()
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{ModuleBuilder, ProfessorBuilder};

    #[test]
    fn new_module_has_no_members() {
        let module = Module::new(
            ModuleName::new("Software Engineering").expect("valid"),
            ModuleCode::new("CS2103").expect("valid"),
        );
        assert_eq!(module.member_count(), 0);
    }

    #[test]
    fn remove_member_clears_both_lists() {
        let professor = ProfessorBuilder::new().with_name("Damith").build();
        let name = professor.name().clone();
        let mut module = ModuleBuilder::new().build();
        assert_eq!(module.member_count(), 1);

        module.remove_member(&name);
        assert_eq!(module.member_count(), 0);
    }

    #[test]
    fn display_shows_code_then_name() {
        let module = ModuleBuilder::new().build();
        assert_eq!(module.to_string(), "CS2103 Software Engineering");
    }
}
